//! Print the OpenAPI document without starting the server

use anyhow::Result;

pub fn openapi(port: u16) -> Result<()> {
    println!("{}", crate::http::api_doc(port).to_pretty_json()?);
    Ok(())
}
