//! Application handlers.
//!
//! One command or query handler per use case. Every handler resolves the
//! executor first, applies its authorization rule, persists changes, then
//! publishes the aggregate's events through [`DomainEvents`](super::events::DomainEvents).

pub mod client;
pub mod sales_opportunity;
pub mod salesperson;

pub use client::{
    FetchClientsHandler, FetchClientsQuery, FetchClientsResult, GetClientByIdHandler,
    GetClientByIdQuery, GetClientByIdResult, InactivateClientCommand, InactivateClientHandler,
    InactivateClientResult, RegisterClientCommand, RegisterClientHandler, RegisterClientResult,
    UpdateClientCommand, UpdateClientHandler, UpdateClientResult,
};
pub use sales_opportunity::{
    FetchSalesOpportunitiesHandler, FetchSalesOpportunitiesQuery, FetchSalesOpportunitiesResult,
    GetSalesOpportunityByIdHandler, GetSalesOpportunityByIdQuery, GetSalesOpportunityByIdResult,
    MarkSalesOpportunityAsDeliveredCommand, MarkSalesOpportunityAsDeliveredHandler,
    MarkSalesOpportunityAsDeliveredResult, MarkSalesOpportunityAsLostCommand,
    MarkSalesOpportunityAsLostHandler, MarkSalesOpportunityAsLostResult,
    RegisterSalesOpportunityCommand, RegisterSalesOpportunityHandler,
    RegisterSalesOpportunityResult, UpdateSalesOpportunityCommand, UpdateSalesOpportunityHandler,
    UpdateSalesOpportunityResult,
};
pub use salesperson::{
    AuthenticateSalespersonCommand, AuthenticateSalespersonHandler, AuthenticateSalespersonResult,
    FetchSalespersonsHandler, FetchSalespersonsQuery, FetchSalespersonsResult,
    GetSalespersonByIdHandler, GetSalespersonByIdQuery, GetSalespersonByIdResult,
    InactivateSalespersonCommand, InactivateSalespersonHandler, InactivateSalespersonResult,
    RegisterSalespersonCommand, RegisterSalespersonHandler, RegisterSalespersonResult,
    UpdateSalespersonCommand, UpdateSalespersonHandler, UpdateSalespersonPasswordCommand,
    UpdateSalespersonPasswordHandler, UpdateSalespersonPasswordResult, UpdateSalespersonResult,
};
