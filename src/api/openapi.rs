//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    asignacion_handler, caso_handler, cliente_handler, promocion_handler, reporte_handler,
    visita_handler,
};
use crate::domain::{
    AsignacionDetalle, AsignacionForm, Caso, CasoForm, Cliente, ClienteForm,
    Estadisticas, EstadisticasCasos, EstadisticasClientes, EstadisticasPromociones, EstadoCaso,
    EstadoCliente, EstadoPromocion, Prioridad, Promocion, PromocionForm, PromocionResumen,
    ResultadoBusqueda, TipoCaso, Visita, VisitaDetalle, VisitaForm,
};
use crate::types::{Creado, Mensaje};

/// OpenAPI documentation for the Casino Atlantic CRM API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Casino Atlantic CRM",
        version = "1.0.0",
        description = "Customer relationship management API for Casino Atlantic: clientes, visitas, casos, promociones y asignaciones"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        cliente_handler::list_clientes,
        cliente_handler::get_cliente,
        cliente_handler::buscar_clientes,
        cliente_handler::crear_cliente,
        cliente_handler::actualizar_cliente,
        cliente_handler::eliminar_cliente,
        visita_handler::list_visitas,
        visita_handler::visitas_de_cliente,
        visita_handler::registrar_visita,
        visita_handler::actualizar_visita,
        visita_handler::eliminar_visita,
        caso_handler::list_casos,
        caso_handler::get_caso,
        caso_handler::crear_caso,
        caso_handler::actualizar_caso,
        caso_handler::eliminar_caso,
        promocion_handler::list_promociones,
        promocion_handler::get_promocion,
        promocion_handler::crear_promocion,
        promocion_handler::actualizar_promocion,
        promocion_handler::eliminar_promocion,
        asignacion_handler::list_asignaciones,
        asignacion_handler::crear_asignacion,
        asignacion_handler::eliminar_asignacion,
        reporte_handler::estadisticas,
        reporte_handler::busqueda,
    ),
    components(
        schemas(
            Cliente,
            ClienteForm,
            EstadoCliente,
            Visita,
            VisitaDetalle,
            VisitaForm,
            Caso,
            CasoForm,
            TipoCaso,
            Prioridad,
            EstadoCaso,
            Promocion,
            PromocionResumen,
            PromocionForm,
            EstadoPromocion,
            AsignacionDetalle,
            AsignacionForm,
            Estadisticas,
            EstadisticasClientes,
            EstadisticasCasos,
            EstadisticasPromociones,
            ResultadoBusqueda,
            Creado,
            Mensaje,
        )
    ),
    tags(
        (name = "Clientes", description = "Customer management"),
        (name = "Visitas", description = "Visit tracking"),
        (name = "Casos", description = "Support tickets"),
        (name = "Promociones", description = "Marketing campaigns"),
        (name = "Asignaciones", description = "Promotion assignments"),
        (name = "Reportes", description = "Statistics and cross-entity search")
    )
)]
pub struct ApiDoc;
