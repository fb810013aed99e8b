/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
/// Session identity and roles
pub mod auth;
/// HTTP transport and status code mapping
pub mod http;
/// Request models and resource ids
pub mod requests;
/// Form validation
pub mod validation;
