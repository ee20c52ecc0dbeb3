use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::AnalysisError;
use crate::wire::TFunctionName;

static IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

/// Qualified function name; builtins have no database.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionName {
    db: Option<String>,
    function: String,
}

impl FunctionName {
    pub fn builtin(function: &str) -> Self {
        Self { db: None, function: function.to_string() }
    }

    /// Parse `fn` or `db.fn`.
    pub fn parse(text: &str) -> Result<Self, AnalysisError> {
        let (db, function) = match text.split_once('.') {
            Some((db, function)) => (Some(db), function),
            None => (None, text),
        };

        let valid = |s: &str| IDENT.is_match(s);
        if !valid(function) || db.is_some_and(|d| !valid(d)) {
            return Err(AnalysisError::InvalidFunctionName(text.to_string()));
        }

        Ok(Self { db: db.map(str::to_string), function: function.to_string() })
    }

    pub fn db(&self) -> Option<&str> {
        self.db.as_deref()
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn is_builtin(&self) -> bool {
        self.db.is_none()
    }

    pub fn to_wire(&self) -> TFunctionName {
        TFunctionName { db_name: self.db.clone(), function_name: self.function.clone() }
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.db {
            Some(db) => write!(f, "{db}.{}", self.function),
            None => write!(f, "{}", self.function),
        }
    }
}
