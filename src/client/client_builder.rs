use crate::client::client::Client;
use crate::gateway::gateway_client::GatewayClient;
use crate::{Error, DEFAULT_REQUEST_TIMEOUT};
use std::sync::Arc;
use std::time::Duration;
use tonic::codegen::http;
use tonic::transport::{Certificate, ClientTlsConfig, Endpoint};

pub struct ClientBuilder {
    uri: http::Uri,
    request_timeout: Duration,
    ca_certificate: Option<Vec<u8>>,
}

impl ClientBuilder {
    pub fn new(uri: http::Uri) -> Self {
        ClientBuilder {
            uri,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            ca_certificate: None,
        }
    }

    pub async fn connect(&self) -> Result<Client, Error> {
        let endpoint = self.endpoint()?;
        tracing::debug!(uri = %self.uri, "connecting to gateway");
        let channel = endpoint.connect().await?;
        Ok(Client {
            gateway: Arc::new(GatewayClient::new(channel)),
            request_timeout: self.request_timeout,
        })
    }

    fn endpoint(&self) -> Result<Endpoint, Error> {
        let uri = self.uri.clone();
        let use_tls = match uri.scheme_str() {
            Some("http") => false,
            Some("https") => true,
            Some(s) => return Err(Error::InvalidSchemeError(s.to_string())),
            None => return Err(Error::SchemeMissingError),
        };
        let domain_name = uri.host().map(String::from);

        let mut endpoint = Endpoint::from(uri).connect_timeout(self.request_timeout);
        if use_tls {
            let mut tls_config = ClientTlsConfig::new();
            if let Some(domain_name) = domain_name {
                tls_config = tls_config.domain_name(domain_name);
            }
            if let Some(pem) = &self.ca_certificate {
                tls_config = tls_config.ca_certificate(Certificate::from_pem(pem));
            }
            endpoint = endpoint.tls_config(tls_config)?;
        }
        Ok(endpoint)
    }

    pub fn uri(&mut self, uri: http::Uri) -> &mut Self {
        self.uri = uri;
        self
    }

    /// Bounds connecting and every call made through the client.
    pub fn request_timeout(&mut self, request_timeout: Duration) -> &mut Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Trust this PEM encoded certificate authority for `https` gateways.
    pub fn ca_certificate(&mut self, pem: Vec<u8>) -> &mut Self {
        self.ca_certificate = Some(pem);
        self
    }
}
