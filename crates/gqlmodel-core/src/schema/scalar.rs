//! Names of the scalar types the transform knows about.

pub const ID: &str = "ID";
pub const STRING: &str = "String";
pub const INT: &str = "Int";
pub const FLOAT: &str = "Float";
pub const BOOLEAN: &str = "Boolean";

/// Seconds since the Unix epoch. Defined by the common type library, not
/// built in.
pub const AWS_TIMESTAMP: &str = "AWSTimestamp";

/// Scalars every GraphQL schema has without defining them.
pub const BUILTIN: [&str; 5] = [ID, STRING, INT, FLOAT, BOOLEAN];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN.contains(&name)
}
