mod presenter_factory;
mod provider_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use provider_factory::{EcosystemProvider, ProviderFactory};
