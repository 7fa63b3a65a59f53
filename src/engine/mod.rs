mod document;
mod fill;
mod items;
mod normalize;
pub mod paths;
mod period;
mod prune;
mod row;
mod scan;
#[cfg(test)]
mod tests;
mod value;

pub use document::OutputDocument;
pub use normalize::RawCell;
pub use scan::{Conversion, ResolvedRange, RowRange, Scanner, build_document};

#[cfg(test)]
use items::*;
#[cfg(test)]
use normalize::*;
#[cfg(test)]
use prune::*;
#[cfg(test)]
use row::*;
#[cfg(test)]
use value::*;
