use template_pack_server::{run, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    run(ServerConfig::from_env()).await
}
