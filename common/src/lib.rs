//! Product Form Common Library
//!
//! CLI・デスクトップ・Web(WASM)で共有される状態と型

pub mod types;
pub mod error;
pub mod labels;
pub mod price;
pub mod form;
pub mod store;
pub mod gate;
pub mod table;
pub mod session;

pub use types::{Field, NewProduct, Product, ProductId};
pub use error::{Result, ValidationError};
pub use price::{format_price, parse_price, PriceParsing};
pub use form::DraftForm;
pub use store::{IdStrategy, ProductList};
pub use gate::DeleteGate;
pub use table::{build_rows, ImageCell, TableRow};
pub use session::{FormSettings, ProductFormState};
