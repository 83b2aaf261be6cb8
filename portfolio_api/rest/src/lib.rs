use std::{net::IpAddr, sync::Arc};

use axum::Router;
use portfolio_core_catalog_contracts::CatalogService;
use portfolio_core_contact_contracts::ContactService;
use tokio::net::TcpListener;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Catalog, Contact> {
    catalog: Catalog,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Origins allowed by the CORS policy. `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl<Catalog, Contact> RestServer<Catalog, Contact>
where
    Catalog: CatalogService,
    Contact: ContactService,
{
    pub fn new(catalog: Catalog, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            catalog,
            contact,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.into_router()?;
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    /// Builds the complete router including all middlewares.
    pub fn into_router(self) -> anyhow::Result<Router<()>> {
        let cors = middlewares::cors::layer(&self.config.allowed_origins)?;

        let catalog = Arc::new(self.catalog);
        let router = Router::new()
            .merge(routes::root::router(Arc::clone(&catalog)))
            .merge(routes::catalog::router(catalog))
            .merge(routes::contact::router(Arc::new(self.contact)));

        // Layers added later wrap the earlier ones, the request id has to be
        // assigned before the others run.
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);

        Ok(router.layer(cors))
    }
}
