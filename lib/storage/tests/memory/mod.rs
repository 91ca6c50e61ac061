mod dataset;
mod listeners;
