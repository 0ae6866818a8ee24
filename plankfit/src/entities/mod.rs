mod instance;
mod layout;
mod plank;
mod solution;

pub use instance::Dimensions;
pub use instance::Instance;
pub use instance::SeedPlacement;
pub use layout::Layout;
pub use layout::PlankKey;
pub use plank::Plank;
pub use plank::PlankKind;
pub use solution::Solution;
