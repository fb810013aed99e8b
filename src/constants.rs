/// Default backend base URL when `PADRINO_API_URL` is not set
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
/// Default directory for file backed session storage
pub const DEFAULT_SESSION_DIR: &str = ".padrino";
/// Storage key holding the serialized session
pub const SESSION_STORAGE_KEY: &str = "user_data";
/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = concat!("padrino-client/", env!("CARGO_PKG_VERSION"));
/// Header carrying the per request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Message for 401 responses
pub const MSG_UNAUTHORIZED: &str = "Credenciales inválidas o sesión expirada";
/// Message for 403 responses
pub const MSG_FORBIDDEN: &str = "No tienes permisos para realizar esta acción";
/// Message for 404 responses
pub const MSG_NOT_FOUND: &str = "Recurso no encontrado";
/// Fallback message for 409 responses without a server message
pub const MSG_CONFLICT: &str = "Conflicto con el estado actual del recurso";
/// Message for 500 responses
pub const MSG_SERVER_ERROR: &str = "Error en el servidor. Intenta más tarde.";
/// Message for transport failures (status 0)
pub const MSG_NETWORK_ERROR: &str =
    "No se pudo conectar con el servidor. Revisa tu conexión e intenta de nuevo.";
/// Message for local storage and I/O failures
pub const MSG_STORAGE_ERROR: &str = "No se pudo acceder al almacenamiento local";
/// Message returned when a resource id is missing or malformed
pub const MSG_INVALID_ID: &str = "ID inválido";
/// Message returned when a backend record cannot be interpreted
pub const MSG_UNEXPECTED_RESPONSE: &str = "Respuesta inesperada del servidor";

/// Default success message for created records
pub const MSG_CREATED: &str = "Registro creado exitosamente";
/// Default success message for updated records
pub const MSG_UPDATED: &str = "Registro actualizado exitosamente";
/// Default success message for deleted records
pub const MSG_DELETED: &str = "Registro eliminado exitosamente";
