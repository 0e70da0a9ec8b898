//! Room administration client for the Lakeside hotel application.
//!
//! Loads the room list from the hotel API, filters and paginates it on the
//! client side, and deletes rooms. The [`ui::ExistingRooms`] component holds
//! the listing state; [`run_client`] drives it from an interactive console.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

use std::sync::Arc;

use tracing::info;

use crate::{
    config::{Args, ClientConfig},
    domain::Paginator,
    error::ClientError,
    infrastructure::repository::HttpRoomRepository,
    ui::{ExistingRooms, run_console},
};

/// Build the component from the command-line arguments and run the console
pub async fn run_client(args: Args) -> Result<(), ClientError> {
    let config = ClientConfig::try_from(args)?;
    info!(base_url = %config.base_url, page_size = config.page_size, "starting room client");

    let repository = HttpRoomRepository::new(
        config.base_url.clone(),
        config.token.clone(),
        config.timeout,
    )?;
    let paginator = Paginator::new(config.page_size)?;
    let component = ExistingRooms::new(Arc::new(repository), paginator);

    run_console(component).await
}
