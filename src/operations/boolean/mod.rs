mod subtract;
mod union;

pub use subtract::Subtract;
pub use union::Union;
