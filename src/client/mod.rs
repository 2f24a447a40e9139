//! Typed HTTP client for the CRM API.
//!
//! Mirrors the REST surface one to one so dashboard code never builds
//! URLs or decodes JSON by hand. Grouped per entity family, like the
//! handlers on the server side.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{
    AsignacionDetalle, AsignacionForm, Caso, CasoForm, Cliente, ClienteForm, Estadisticas,
    Promocion, PromocionForm, PromocionResumen, ResultadoBusqueda, TipoBusqueda, Visita,
    VisitaDetalle, VisitaForm,
};
use crate::types::{Creado, Mensaje};

const MENSAJE_ERROR_PETICION: &str = "Error en la petición";

/// Errors surfaced by [`ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with an error body
    #[error("{mensaje}")]
    Api { status: StatusCode, mensaje: String },
    /// The request never produced a usable response
    #[error("error de transporte: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Error body emitted by every API failure path.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Entry point for talking to the CRM API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client against a base URL such as `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn clientes(&self) -> ClientesApi<'_> {
        ClientesApi { api: self }
    }

    pub fn visitas(&self) -> VisitasApi<'_> {
        VisitasApi { api: self }
    }

    pub fn casos(&self) -> CasosApi<'_> {
        CasosApi { api: self }
    }

    pub fn promociones(&self) -> PromocionesApi<'_> {
        PromocionesApi { api: self }
    }

    pub fn asignaciones(&self) -> AsignacionesApi<'_> {
        AsignacionesApi { api: self }
    }

    pub fn reportes(&self) -> ReportesApi<'_> {
        ReportesApi { api: self }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::parse(response).await
    }

    async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::parse(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let mensaje = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| MENSAJE_ERROR_PETICION.to_string());

        Err(ClientError::Api { status, mensaje })
    }
}

/// Cliente endpoints.
pub struct ClientesApi<'a> {
    api: &'a ApiClient,
}

impl ClientesApi<'_> {
    pub async fn get_all(&self) -> ClientResult<Vec<Cliente>> {
        self.api.get("/clientes").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Cliente> {
        self.api.get(&format!("/clientes/{id}")).await
    }

    pub async fn buscar(&self, termino: &str) -> ClientResult<Vec<Cliente>> {
        self.api.get(&format!("/clientes/buscar/{termino}")).await
    }

    pub async fn create(&self, form: &ClienteForm) -> ClientResult<Creado> {
        self.api.post("/clientes", form).await
    }

    pub async fn update(&self, id: i64, form: &ClienteForm) -> ClientResult<Mensaje> {
        self.api.put(&format!("/clientes/{id}"), form).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<Mensaje> {
        self.api.delete(&format!("/clientes/{id}")).await
    }
}

/// Visita endpoints.
pub struct VisitasApi<'a> {
    api: &'a ApiClient,
}

impl VisitasApi<'_> {
    pub async fn get_all(&self) -> ClientResult<Vec<VisitaDetalle>> {
        self.api.get("/visitas").await
    }

    pub async fn by_cliente(&self, cliente_id: i64) -> ClientResult<Vec<Visita>> {
        self.api.get(&format!("/visitas/cliente/{cliente_id}")).await
    }

    pub async fn create(&self, form: &VisitaForm) -> ClientResult<Creado> {
        self.api.post("/visitas", form).await
    }

    pub async fn update(&self, id: i64, form: &VisitaForm) -> ClientResult<Mensaje> {
        self.api.put(&format!("/visitas/{id}"), form).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<Mensaje> {
        self.api.delete(&format!("/visitas/{id}")).await
    }
}

/// Caso endpoints.
pub struct CasosApi<'a> {
    api: &'a ApiClient,
}

impl CasosApi<'_> {
    pub async fn get_all(&self) -> ClientResult<Vec<Caso>> {
        self.api.get("/casos").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Caso> {
        self.api.get(&format!("/casos/{id}")).await
    }

    pub async fn create(&self, form: &CasoForm) -> ClientResult<Creado> {
        self.api.post("/casos", form).await
    }

    pub async fn update(&self, id: i64, form: &CasoForm) -> ClientResult<Mensaje> {
        self.api.put(&format!("/casos/{id}"), form).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<Mensaje> {
        self.api.delete(&format!("/casos/{id}")).await
    }
}

/// Promoción endpoints.
pub struct PromocionesApi<'a> {
    api: &'a ApiClient,
}

impl PromocionesApi<'_> {
    pub async fn get_all(&self) -> ClientResult<Vec<PromocionResumen>> {
        self.api.get("/promociones").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Promocion> {
        self.api.get(&format!("/promociones/{id}")).await
    }

    pub async fn create(&self, form: &PromocionForm) -> ClientResult<Creado> {
        self.api.post("/promociones", form).await
    }

    pub async fn update(&self, id: i64, form: &PromocionForm) -> ClientResult<Mensaje> {
        self.api.put(&format!("/promociones/{id}"), form).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<Mensaje> {
        self.api.delete(&format!("/promociones/{id}")).await
    }
}

/// Asignación endpoints.
pub struct AsignacionesApi<'a> {
    api: &'a ApiClient,
}

impl AsignacionesApi<'_> {
    pub async fn get_all(&self) -> ClientResult<Vec<AsignacionDetalle>> {
        self.api.get("/asignaciones").await
    }

    pub async fn create(&self, form: &AsignacionForm) -> ClientResult<Creado> {
        self.api.post("/asignaciones", form).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<Mensaje> {
        self.api.delete(&format!("/asignaciones/{id}")).await
    }
}

/// Estadísticas and búsqueda endpoints.
pub struct ReportesApi<'a> {
    api: &'a ApiClient,
}

impl ReportesApi<'_> {
    pub async fn estadisticas(&self) -> ClientResult<Estadisticas> {
        self.api.get("/estadisticas").await
    }

    pub async fn busqueda(
        &self,
        query: &str,
        tipo: TipoBusqueda,
    ) -> ClientResult<Vec<ResultadoBusqueda>> {
        self.api
            .get_with_query("/busqueda", &[("query", query), ("tipo", tipo.as_str())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = ApiClient::new("http://localhost:3000/api/");
        assert_eq!(api.url("/clientes"), "http://localhost:3000/api/clientes");
    }
}
