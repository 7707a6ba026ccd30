//! Salesperson command and query handlers.
//!
//! Everything except authentication is manager-only.

mod authenticate_salesperson;
mod fetch_salespersons;
mod get_salesperson_by_id;
mod inactivate_salesperson;
mod register_salesperson;
mod update_salesperson;
mod update_salesperson_password;

pub use authenticate_salesperson::{
    AuthenticateSalespersonCommand, AuthenticateSalespersonHandler, AuthenticateSalespersonResult,
};
pub use fetch_salespersons::{
    FetchSalespersonsHandler, FetchSalespersonsQuery, FetchSalespersonsResult,
};
pub use get_salesperson_by_id::{
    GetSalespersonByIdHandler, GetSalespersonByIdQuery, GetSalespersonByIdResult,
};
pub use inactivate_salesperson::{
    InactivateSalespersonCommand, InactivateSalespersonHandler, InactivateSalespersonResult,
};
pub use register_salesperson::{
    RegisterSalespersonCommand, RegisterSalespersonHandler, RegisterSalespersonResult,
};
pub use update_salesperson::{
    UpdateSalespersonCommand, UpdateSalespersonHandler, UpdateSalespersonResult,
};
pub use update_salesperson_password::{
    UpdateSalespersonPasswordCommand, UpdateSalespersonPasswordHandler,
    UpdateSalespersonPasswordResult,
};
