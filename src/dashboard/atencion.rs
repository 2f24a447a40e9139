//! Customer-service dashboard: clientes, visitas and casos.

use crate::client::{ApiClient, ClientResult};
use crate::dashboard::filter::coincide;
use crate::dashboard::state::{ListState, Recurso};
use crate::dashboard::view_model::{celda_opcional, CuerpoTabla, Tabla};
use crate::domain::{Caso, CasoForm, Cliente, ClienteForm, VisitaDetalle, VisitaForm};

const ERROR_CLIENTES: &str = "Error al cargar clientes. Verifique la conexión con el servidor.";
const ERROR_VISITAS: &str = "Error al cargar visitas. Verifique la conexión con el servidor.";
const ERROR_CASOS: &str = "Error al cargar casos. Verifique la conexión con el servidor.";

/// State of the customer-service dashboard.
pub struct AtencionView {
    pub clientes: Recurso<Cliente>,
    pub visitas: Recurso<VisitaDetalle>,
    pub casos: Recurso<Caso>,
}

impl Default for AtencionView {
    fn default() -> Self {
        Self {
            clientes: Recurso::Cargando,
            visitas: Recurso::Cargando,
            casos: Recurso::Cargando,
        }
    }
}

impl AtencionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the three lists concurrently. A failing list shows its
    /// error row without blocking the others.
    pub async fn cargar(&mut self, api: &ApiClient) {
        let clientes_api = api.clientes();
        let visitas_api = api.visitas();
        let casos_api = api.casos();
        let (clientes, visitas, casos) = tokio::join!(
            clientes_api.get_all(),
            visitas_api.get_all(),
            casos_api.get_all(),
        );

        self.clientes = a_recurso(clientes, ERROR_CLIENTES);
        self.visitas = a_recurso(visitas, ERROR_VISITAS);
        self.casos = a_recurso(casos, ERROR_CASOS);
    }

    pub async fn recargar_clientes(&mut self, api: &ApiClient) {
        self.clientes = a_recurso(api.clientes().get_all().await, ERROR_CLIENTES);
    }

    pub async fn recargar_visitas(&mut self, api: &ApiClient) {
        self.visitas = a_recurso(api.visitas().get_all().await, ERROR_VISITAS);
    }

    pub async fn recargar_casos(&mut self, api: &ApiClient) {
        self.casos = a_recurso(api.casos().get_all().await, ERROR_CASOS);
    }

    // Mutations re-fetch the affected list after the server confirms.

    pub async fn crear_cliente(&mut self, api: &ApiClient, form: ClienteForm) -> ClientResult<String> {
        let creado = api.clientes().create(&form).await?;
        self.recargar_clientes(api).await;
        Ok(creado.mensaje)
    }

    pub async fn actualizar_cliente(
        &mut self,
        api: &ApiClient,
        id: i64,
        form: ClienteForm,
    ) -> ClientResult<String> {
        let respuesta = api.clientes().update(id, &form).await?;
        self.recargar_clientes(api).await;
        Ok(respuesta.mensaje)
    }

    pub async fn eliminar_cliente(&mut self, api: &ApiClient, id: i64) -> ClientResult<String> {
        let respuesta = api.clientes().delete(id).await?;
        self.recargar_clientes(api).await;
        Ok(respuesta.mensaje)
    }

    pub async fn registrar_visita(
        &mut self,
        api: &ApiClient,
        form: VisitaForm,
    ) -> ClientResult<String> {
        let creado = api.visitas().create(&form).await?;
        self.recargar_visitas(api).await;
        Ok(creado.mensaje)
    }

    pub async fn actualizar_visita(
        &mut self,
        api: &ApiClient,
        id: i64,
        form: VisitaForm,
    ) -> ClientResult<String> {
        let respuesta = api.visitas().update(id, &form).await?;
        self.recargar_visitas(api).await;
        Ok(respuesta.mensaje)
    }

    pub async fn eliminar_visita(&mut self, api: &ApiClient, id: i64) -> ClientResult<String> {
        let respuesta = api.visitas().delete(id).await?;
        self.recargar_visitas(api).await;
        Ok(respuesta.mensaje)
    }

    pub async fn crear_caso(&mut self, api: &ApiClient, form: CasoForm) -> ClientResult<String> {
        let creado = api.casos().create(&form).await?;
        self.recargar_casos(api).await;
        Ok(creado.mensaje)
    }

    pub async fn actualizar_caso(
        &mut self,
        api: &ApiClient,
        id: i64,
        form: CasoForm,
    ) -> ClientResult<String> {
        let respuesta = api.casos().update(id, &form).await?;
        self.recargar_casos(api).await;
        Ok(respuesta.mensaje)
    }

    pub async fn eliminar_caso(&mut self, api: &ApiClient, id: i64) -> ClientResult<String> {
        let respuesta = api.casos().delete(id).await?;
        self.recargar_casos(api).await;
        Ok(respuesta.mensaje)
    }

    // Filters recompute visibility from the loaded snapshot.

    pub fn filtrar_clientes(&mut self, nombre: &str, dni: &str) {
        if let Some(lista) = self.clientes.lista_mut() {
            lista.filtrar(|c| coincide(&c.nombre, nombre) && coincide(&c.dni, dni));
        }
    }

    pub fn limpiar_filtro_clientes(&mut self) {
        if let Some(lista) = self.clientes.lista_mut() {
            lista.limpiar();
        }
    }

    pub fn filtrar_visitas(&mut self, nombre: &str, dni: &str) {
        if let Some(lista) = self.visitas.lista_mut() {
            lista.filtrar(|v| coincide(&v.nombre, nombre) && coincide(&v.dni, dni));
        }
    }

    pub fn limpiar_filtro_visitas(&mut self) {
        if let Some(lista) = self.visitas.lista_mut() {
            lista.limpiar();
        }
    }

    pub fn filtrar_casos(&mut self, cliente: &str, codigo: &str) {
        if let Some(lista) = self.casos.lista_mut() {
            lista.filtrar(|c| coincide(&c.cliente, cliente) && coincide(&c.codigo, codigo));
        }
    }

    pub fn limpiar_filtro_casos(&mut self) {
        if let Some(lista) = self.casos.lista_mut() {
            lista.limpiar();
        }
    }

    // Tables

    pub fn tabla_clientes(&self) -> Tabla {
        Tabla::new(
            vec!["Nombre", "DNI", "Email", "Teléfono", "Estado"],
            cuerpo(&self.clientes, "No hay clientes registrados", |c: &Cliente| {
                vec![
                    c.nombre.clone(),
                    c.dni.clone(),
                    c.email.clone(),
                    celda_opcional(c.telefono.as_deref()),
                    c.estado.to_string(),
                ]
            }),
        )
    }

    pub fn tabla_visitas(&self) -> Tabla {
        Tabla::new(
            vec!["Cliente", "DNI", "Fecha", "Servicio"],
            cuerpo(&self.visitas, "No hay visitas registradas", |v: &VisitaDetalle| {
                vec![
                    v.nombre.clone(),
                    v.dni.clone(),
                    v.fecha.format("%d/%m/%Y").to_string(),
                    v.servicio.clone(),
                ]
            }),
        )
    }

    pub fn tabla_casos(&self) -> Tabla {
        Tabla::new(
            vec![
                "Código",
                "Cliente",
                "Tipo",
                "Asunto",
                "Prioridad",
                "Estado",
                "Fecha",
                "Responsable",
            ],
            cuerpo(&self.casos, "No hay casos registrados", |c: &Caso| {
                vec![
                    c.codigo.clone(),
                    c.cliente.clone(),
                    c.tipo.to_string(),
                    c.asunto.clone(),
                    c.prioridad.to_string(),
                    c.estado.to_string(),
                    c.fecha.format("%d/%m/%Y").to_string(),
                    celda_opcional(c.responsable.as_deref()),
                ]
            }),
        )
    }
}

fn a_recurso<T: Clone>(resultado: ClientResult<Vec<T>>, mensaje_error: &str) -> Recurso<T> {
    match resultado {
        Ok(items) => Recurso::Listo(ListState::new(items)),
        Err(err) => {
            tracing::error!("{}: {}", mensaje_error, err);
            Recurso::Error(mensaje_error.to_string())
        }
    }
}

pub(crate) fn cuerpo<T: Clone>(
    recurso: &Recurso<T>,
    texto_vacio: &str,
    fila: impl Fn(&T) -> Vec<String>,
) -> CuerpoTabla {
    match recurso {
        Recurso::Cargando => CuerpoTabla::Cargando,
        Recurso::Error(mensaje) => CuerpoTabla::Error(mensaje.clone()),
        Recurso::Listo(lista) if lista.visible().is_empty() => {
            CuerpoTabla::Vacio(texto_vacio.to_string())
        }
        Recurso::Listo(lista) => {
            CuerpoTabla::Filas(lista.visible().iter().map(fila).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EstadoCliente;
    use chrono::{TimeZone, Utc};

    fn cliente(nombre: &str, dni: &str) -> Cliente {
        Cliente {
            id: 1,
            nombre: nombre.to_string(),
            dni: dni.to_string(),
            email: format!("{dni}@test.com"),
            telefono: None,
            estado: EstadoCliente::Activo,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn filtro_matches_accent_insensitively() {
        let mut view = AtencionView::new();
        view.clientes = Recurso::Listo(ListState::new(vec![
            cliente("María González", "111"),
            cliente("Pedro Pérez", "222"),
        ]));

        view.filtrar_clientes("gonzalez", "");
        assert_eq!(view.tabla_clientes().filas().len(), 1);

        view.limpiar_filtro_clientes();
        assert_eq!(view.tabla_clientes().filas().len(), 2);
    }

    #[test]
    fn empty_list_renders_the_placeholder_row() {
        let mut view = AtencionView::new();
        view.clientes = Recurso::Listo(ListState::new(Vec::<Cliente>::new()));

        match view.tabla_clientes().cuerpo {
            CuerpoTabla::Vacio(texto) => assert_eq!(texto, "No hay clientes registrados"),
            otro => panic!("cuerpo inesperado: {otro:?}"),
        }
    }

    #[test]
    fn telefono_missing_renders_a_dash() {
        let mut view = AtencionView::new();
        view.clientes = Recurso::Listo(ListState::new(vec![cliente("Ana", "333")]));

        let tabla = view.tabla_clientes();
        assert_eq!(tabla.filas()[0][3], "—");
    }
}
