/// Field type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// String
    String,
    /// Unsigned 64 bit integer written as a plain digit sequence
    Integer,
    /// Non-negative 64 bit floating point number
    Number,
}
