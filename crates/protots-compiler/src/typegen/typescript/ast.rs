//! The subset of the TypeScript AST that references a declaration.

/// Value-position reference: `Foo`, `dep.Foo`, `dep.Outer.Inner`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Identifier(String),
    PropertyAccess { object: Box<Expr>, name: String },
}

/// Left-associative dotted name in type position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityName {
    Identifier(String),
    Qualified { left: Box<EntityName>, right: String },
}

/// Type-position reference (no type arguments are ever needed here).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeReference {
    pub name: EntityName,
}

impl Expr {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// `self.name`
    pub fn property(self, name: impl Into<String>) -> Self {
        Self::PropertyAccess {
            object: Box::new(self),
            name: name.into(),
        }
    }
}

impl EntityName {
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// `self.right`
    pub fn qualify(self, right: impl Into<String>) -> Self {
        Self::Qualified {
            left: Box::new(self),
            right: right.into(),
        }
    }
}

impl TypeReference {
    pub fn new(name: EntityName) -> Self {
        Self { name }
    }
}
