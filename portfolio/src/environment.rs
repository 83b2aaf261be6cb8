use portfolio_api_rest::RestServerConfig;
use portfolio_config::Config;
use portfolio_core_catalog_impl::CatalogServiceImpl;
use portfolio_core_contact_impl::ContactServiceImpl;
use portfolio_persistence_file::FileMessageLogRepository;
use portfolio_shared_impl::time::TimeServiceImpl;

pub type Time = TimeServiceImpl;
pub type MessageLog = FileMessageLogRepository;
pub type CatalogService = CatalogServiceImpl;
pub type ContactService = ContactServiceImpl<Time, MessageLog>;
pub type RestServer = portfolio_api_rest::RestServer<CatalogService, ContactService>;

/// Wires the services described by the given config into a rest server.
///
/// The catalog is read once here and shared for the lifetime of the server.
pub fn build_rest_server(config: &Config) -> anyhow::Result<RestServer> {
    let catalog = portfolio_config::load_catalog(&config.catalog.path)?;
    let catalog = CatalogServiceImpl::new(catalog);

    let message_log = FileMessageLogRepository::new(&config.contact.log_path);
    let contact = ContactServiceImpl::new(TimeServiceImpl, message_log);

    Ok(RestServer::new(
        catalog,
        contact,
        RestServerConfig {
            allowed_origins: config.http.cors.allowed_origins.clone(),
        },
    ))
}
