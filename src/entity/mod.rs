/// The four REST-backed entities the dashboard manages.
///
/// Each entity module carries the serde mapping to the backend's wire format
/// (Indonesian JSON field names), a typed field enum with a [`Record`]
/// implementation, the page's column table, and the fields its free-text
/// search covers.
///
/// [`Record`]: crate::schema::Record

pub mod consultation;
pub mod order;
pub mod product;
pub mod user;

pub use consultation::{Consultation, ConsultationField, ConsultationStatus, ConsultationUpdate};
pub use order::{Order, OrderField, OrderItem, OrderStatus};
pub use product::{Product, ProductField, StockFilter};
pub use user::{AccountTable, Gender, Role, User, UserField, UserUpdate};
