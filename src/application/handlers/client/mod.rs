//! Client command and query handlers.
//!
//! Every operation follows the rep-or-manager rule against the client's
//! sales rep (or the requested rep for registration and listing).

mod fetch_clients;
mod get_client_by_id;
mod inactivate_client;
mod register_client;
mod update_client;

pub use fetch_clients::{FetchClientsHandler, FetchClientsQuery, FetchClientsResult};
pub use get_client_by_id::{GetClientByIdHandler, GetClientByIdQuery, GetClientByIdResult};
pub use inactivate_client::{
    InactivateClientCommand, InactivateClientHandler, InactivateClientResult,
};
pub use register_client::{RegisterClientCommand, RegisterClientHandler, RegisterClientResult};
pub use update_client::{UpdateClientCommand, UpdateClientHandler, UpdateClientResult};

use crate::application::CrmError;
use crate::domain::client::Client;
use crate::domain::foundation::ClientId;
use crate::ports::ClientsRepository;

async fn load_client(clients: &dyn ClientsRepository, id: &ClientId) -> Result<Client, CrmError> {
    clients
        .find_by_id(id)
        .await?
        .ok_or(CrmError::ClientNotFound)
}
