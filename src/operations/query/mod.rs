mod contains;
mod is_empty;
mod shortest_line;

pub use contains::Contains;
pub use is_empty::IsEmpty;
pub use shortest_line::ShortestLine;
