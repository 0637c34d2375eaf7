use std::{fmt, marker::PhantomData};

use reqwest::{
    Method, Request, Url,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::types::{Region, SchemaError, SchemaResult};

/// Host family an operation is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    /// `https://{region}.api.pvp.net`
    Regional,
    /// `https://global.api.pvp.net`, static data and tournaments.
    Global,
    /// `http://status.leagueoflegends.com`
    Status,
}

/// Base URLs every operation path is appended to.
///
/// The regional template substitutes `{region}` with the lower-case region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHosts {
    pub regional: String,
    pub global: String,
    pub status: String,
}

impl ApiHosts {
    pub const DEFAULT_REGIONAL: &'static str = "https://{region}.api.pvp.net";
    pub const DEFAULT_GLOBAL: &'static str = "https://global.api.pvp.net";
    pub const DEFAULT_STATUS: &'static str = "http://status.leagueoflegends.com";

    pub fn base(&self, kind: HostKind, region: Region) -> String {
        let template = match kind {
            HostKind::Regional => &self.regional,
            HostKind::Global => &self.global,
            HostKind::Status => &self.status,
        };

        template
            .trim_end_matches('/')
            .replace("{region}", region.as_str())
    }
}

impl Default for ApiHosts {
    fn default() -> Self {
        Self {
            regional: Self::DEFAULT_REGIONAL.to_string(),
            global: Self::DEFAULT_GLOBAL.to_string(),
            status: Self::DEFAULT_STATUS.to_string(),
        }
    }
}

/// Inert description of one remote call, typed by the shape it answers with.
pub struct Endpoint<T> {
    operation: &'static str,
    method: Method,
    base: String,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
    response: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T> {
    pub(crate) fn new(operation: &'static str, method: Method, base: String) -> Self {
        Self {
            operation,
            method,
            base,
            query: Vec::new(),
            body: None,
            response: PhantomData,
        }
    }

    pub(crate) fn get(operation: &'static str, base: String) -> Self {
        Self::new(operation, Method::GET, base)
    }

    pub(crate) fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub(crate) fn with_optional_query<V: ToString>(
        self,
        key: &'static str,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(value) => self.with_query(key, value),
            None => self,
        }
    }

    pub(crate) fn with_body<B: Serialize>(mut self, body: &B) -> SchemaResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Name of the builder that produced this endpoint.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Full URL, query string included.
    pub fn url(&self) -> SchemaResult<Url> {
        let mut url = Url::parse(&self.base).map_err(|e| SchemaError::InvalidUrl {
            url: self.base.clone(),
            reason: e.to_string(),
        })?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Request an HTTP client can execute as-is, authentication aside.
    pub fn into_request(self) -> SchemaResult<Request> {
        let url = self.url()?;
        let mut request = Request::new(self.method, url);

        if let Some(body) = self.body {
            let raw = serde_json::to_vec(&body)?;
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(raw.into());
        }

        Ok(request)
    }
}

impl<T: DeserializeOwned> Endpoint<T> {
    /// Decode a raw response body into the declared response shape.
    ///
    /// An empty body decodes as JSON `null`, which is what no-content operations expect.
    pub fn decode(&self, raw: &[u8]) -> SchemaResult<T> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }

        Ok(serde_json::from_slice(raw)?)
    }
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        Self {
            operation: self.operation,
            method: self.method.clone(),
            base: self.base.clone(),
            query: self.query.clone(),
            body: self.body.clone(),
            response: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("operation", &self.operation)
            .field("method", &self.method)
            .field("base", &self.base)
            .field("query", &self.query)
            .field("body", &self.body)
            .finish()
    }
}

/// Join ids into the comma separated path segment the API expects.
pub(crate) fn join_ids<I: ToString>(
    operation: &'static str,
    ids: &[I],
    limit: usize,
) -> SchemaResult<String> {
    if ids.is_empty() {
        return Err(SchemaError::EmptyIdList { operation });
    }
    if ids.len() > limit {
        return Err(SchemaError::TooManyIds {
            operation,
            limit,
            given: ids.len(),
        });
    }

    Ok(ids
        .iter()
        .map(|id| urlencoding::encode(&id.to_string()).into_owned())
        .collect::<Vec<_>>()
        .join(","))
}

pub(crate) fn ensure_range(
    parameter: &'static str,
    given: i64,
    min: i64,
    max: i64,
) -> SchemaResult<()> {
    if (min..=max).contains(&given) {
        Ok(())
    } else {
        Err(SchemaError::OutOfRange {
            parameter,
            min,
            max,
            given,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Payload {
        id: i64,
    }

    #[test]
    fn hosts_substitute_region() {
        let hosts = ApiHosts::default();
        assert_eq!(
            hosts.base(HostKind::Regional, Region::Euw),
            "https://euw.api.pvp.net"
        );
        assert_eq!(
            hosts.base(HostKind::Global, Region::Kr),
            "https://global.api.pvp.net"
        );

        let proxied = ApiHosts {
            regional: "http://localhost:8080/{region}/".to_string(),
            ..ApiHosts::default()
        };
        assert_eq!(
            proxied.base(HostKind::Regional, Region::Na),
            "http://localhost:8080/na"
        );
    }

    #[test]
    fn url_appends_query_in_order() {
        let endpoint: Endpoint<Payload> =
            Endpoint::get("test", "https://euw.api.pvp.net/a".into())
                .with_query("b", 1)
                .with_optional_query::<bool>("skipped", None)
                .with_optional_query("a", Some(true));

        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://euw.api.pvp.net/a?b=1&a=true"
        );
    }

    #[test]
    fn invalid_base_is_reported() {
        let endpoint: Endpoint<Payload> = Endpoint::get("test", "ht!tp://invalid-url".into());
        assert!(matches!(
            endpoint.url(),
            Err(SchemaError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn into_request_carries_json_body() {
        let endpoint: Endpoint<i32> =
            Endpoint::new("test", Method::POST, "https://global.api.pvp.net/x".into())
                .with_body(&Payload { id: 7 })
                .unwrap();

        let request = endpoint.into_request().unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"id":7}"#);
    }

    #[test]
    fn decode_handles_shapes_and_empty_bodies() {
        let endpoint: Endpoint<Payload> = Endpoint::get("test", "https://x".into());
        assert_eq!(endpoint.decode(br#"{"id":3}"#).unwrap(), Payload { id: 3 });
        assert!(matches!(
            endpoint.decode(br#"{"id":"x"}"#),
            Err(SchemaError::Serde(_))
        ));

        let no_content: Endpoint<()> = Endpoint::get("test", "https://x".into());
        no_content.decode(b"").unwrap();
    }

    #[test]
    fn id_lists_are_bounded() {
        assert_eq!(join_ids("op", &[1, 2, 3], 10).unwrap(), "1,2,3");
        assert!(matches!(
            join_ids::<i64>("op", &[], 10),
            Err(SchemaError::EmptyIdList { operation: "op" })
        ));
        assert!(matches!(
            join_ids("op", &[0; 11], 10),
            Err(SchemaError::TooManyIds {
                limit: 10,
                given: 11,
                ..
            })
        ));
        assert_eq!(
            join_ids("op", &["Le Conservateur", "a,b"], 40).unwrap(),
            "Le%20Conservateur,a%2Cb"
        );
    }
}
