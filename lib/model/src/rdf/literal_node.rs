use crate::rdf::identity_node;
use crate::vocab::rdf;
use std::fmt::{Debug, Display, Formatter, Write};
use std::sync::Arc;

/// The parts of a literal that are shared by all handles to the same instance.
#[derive(Debug)]
pub(crate) struct LiteralData {
    lexical: Box<str>,
    datatype: Box<str>,
    language: Option<Box<str>>,
}

/// A literal term made of a lexical value, a datatype IRI and an optional language tag.
///
/// Equality is based on the instance, see [IriNode](crate::IriNode).
#[derive(Clone)]
pub struct LiteralNode(Arc<LiteralData>);

identity_node!(LiteralNode, WeakLiteralNode, LiteralData);

impl LiteralNode {
    /// Creates a new, non-canonical literal with the given `datatype`.
    pub fn new_typed(lexical: impl Into<Box<str>>, datatype: impl Into<Box<str>>) -> Self {
        Self(Arc::new(LiteralData {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        }))
    }

    /// Creates a new, non-canonical language-tagged literal. Its datatype is `rdf:langString`.
    pub fn new_language_tagged(
        lexical: impl Into<Box<str>>,
        language: impl Into<Box<str>>,
    ) -> Self {
        Self(Arc::new(LiteralData {
            lexical: lexical.into(),
            datatype: rdf::LANG_STRING.as_str().into(),
            language: Some(language.into()),
        }))
    }

    pub fn lexical(&self) -> &str {
        &self.0.lexical
    }

    pub fn datatype(&self) -> &str {
        &self.0.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.0.language.as_deref()
    }
}

impl Debug for LiteralNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiteralNode")
            .field("lexical", &self.lexical())
            .field("datatype", &self.datatype())
            .field("language", &self.language())
            .finish()
    }
}

impl Display for LiteralNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('"')?;
        for c in self.lexical().chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')?;
        match self.language() {
            Some(language) => write!(f, "@{language}"),
            None => write!(f, "^^<{}>", self.datatype()),
        }
    }
}
