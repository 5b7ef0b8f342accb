use plantao_farma::config::DirectoryConfig;
use plantao_farma::HttpDirectory;
use serde_json::{json, Value};

pub fn directory_for(base_url: String) -> HttpDirectory {
    let config = DirectoryConfig {
        base_url,
        timeout_seconds: 2,
        ..DirectoryConfig::default()
    };
    HttpDirectory::new(&config).unwrap()
}

pub fn pharmacy(name: &str, abre: &str, fecha: &str) -> Value {
    json!({
        "nome": name,
        "endereco": format!("Rua {}, 10", name),
        "telefone": "(14) 3642-3242",
        "latitude": -22.0744,
        "longitude": -48.7403,
        "abre": abre,
        "fecha": fecha
    })
}
