//! Test fixtures - reusable data files.

/// Catalog with mixed id types and a string price.
#[allow(dead_code)]
pub const CATALOG: &str = r#"[
    {"id": 1, "categoria": "livros", "preco": 30.5},
    {"id": 2, "categoria": "games", "preco": 200},
    {"id": "3a", "categoria": "livros", "preco": "12.90"},
    {"id": 4, "categoria": "games", "preco": 89.99},
    {"id": 5, "categoria": "casa", "preco": 45}
]"#;

/// Two guitarists and a bassist who also plays guitar, all rock.
#[allow(dead_code)]
pub const ROCK_REGISTRY: &str = r#"{
    "musicos": [
        {"nome": "ANA", "email": "ANA@X.COM", "generos_musicais": ["ROCK"], "instrumentos": ["GUITARRA"]},
        {"nome": "BRUNO", "email": "BRUNO@X.COM", "generos_musicais": ["ROCK"], "instrumentos": ["GUITARRA"]},
        {"nome": "CAIO", "email": "CAIO@X.COM", "generos_musicais": ["ROCK", "JAZZ"], "instrumentos": ["BAIXO", "GUITARRA"]}
    ]
}"#;
