pub(crate) const JSON_CONFIG: &[u8] = br#"
{
  "data_sources": [
    { "name": "users", "type": "api", "uri": "http://localhost:8080/users" },
    { "name": "export", "type": "file", "uri": "./data/export.csv" }
  ],
  "data_targets": [
    { "name": "warehouse", "type": "db", "uri": "postgres://localhost/warehouse" }
  ],
  "notifications": {
    "email": {
      "smtp": {
        "server": "smtp.example.com",
        "port": 587,
        "username": "integrator",
        "password": "hunter2"
      },
      "recipient": "ops@example.com"
    }
  }
}
"#;

pub(crate) const YAML_CONFIG: &[u8] = br#"
data_sources:
  - name: "users"
    type: "api"
    uri: "http://localhost:8080/users"
  - name: "export"
    type: "file"
    uri: "./data/export.csv"
data_targets:
  - name: "warehouse"
    type: "db"
    uri: "postgres://localhost/warehouse"
notifications:
  email:
    smtp:
      server: "smtp.example.com"
      port: 587
      username: "integrator"
      password: "hunter2"
    recipient: "ops@example.com"
"#;

pub(crate) const TOML_CONFIG: &[u8] = br#"
[[data_sources]]
name = "users"
type = "api"
uri = "http://localhost:8080/users"

[[data_sources]]
name = "export"
type = "file"
uri = "./data/export.csv"

[[data_targets]]
name = "warehouse"
type = "db"
uri = "postgres://localhost/warehouse"

[notifications.email]
recipient = "ops@example.com"

[notifications.email.smtp]
server = "smtp.example.com"
port = 587
username = "integrator"
password = "hunter2"
"#;

pub(crate) const RON_CONFIG: &[u8] = br#"
(
  data_sources: [
    (name: "users", type: "api", uri: "http://localhost:8080/users"),
    (name: "export", type: "file", uri: "./data/export.csv"),
  ],
  data_targets: [
    (name: "warehouse", type: "db", uri: "postgres://localhost/warehouse"),
  ],
  notifications: (
    email: (
      smtp: (
        server: "smtp.example.com",
        port: 587,
        username: "integrator",
        password: "hunter2",
      ),
      recipient: "ops@example.com",
    ),
  ),
)
"#;
