/* Generic float trait and small fixed size linear algebra */
pub mod traits;
pub mod linear_algebra;
