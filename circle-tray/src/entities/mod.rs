mod disc;
mod group;
mod instance;
mod tray;
mod validation;

#[doc(inline)]
pub use disc::Disc;
#[doc(inline)]
pub use disc::DiscRecord;
#[doc(inline)]
pub use disc::Side;
#[doc(inline)]
pub use group::Group;
#[doc(inline)]
pub use group::group_records;
#[doc(inline)]
pub use group::sorted_by_largest;
#[doc(inline)]
pub use instance::TrayInstance;
#[doc(inline)]
pub use tray::Tray;
#[doc(inline)]
pub use validation::ValidationError;
