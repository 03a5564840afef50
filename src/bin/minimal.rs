//! Minimal demo: render one fixed document set and print the result.
//!
//! No editor, no state, just the engine boundary exercised once with a
//! template, a data document, and one named partial.

use std::collections::BTreeMap;

use serde_json::json;

use mustache_playground::render::{Engine, EngineError, HandlebarsEngine};

const TEMPLATE: &str = r#"
  <h1> Hello {{ message }}! </h1>
  <hr />
  <h5> List of Names </h5>

  <ul>
    {{#each users}}
      <li> {{> user-partial }} </li>
    {{/each}}
  </ul>
"#;

const USER_PARTIAL: &str = r#"
    <strong> {{ name }} </strong> - <em> {{ email }} </em>
  "#;

fn main() -> Result<(), EngineError> {
    let data = json!({
        "message": "World",
        "users": [
            { "name": "Tori Asterson", "email": "thetoaster45@gmail.com" },
            { "name": "May Fleur", "email": "mflr12@gmail.com" },
            { "name": "Umi Sánchez", "email": "sanchezumi@orange.co.uk" },
        ],
    });

    let mut partials = BTreeMap::new();
    partials.insert("user-partial".to_string(), USER_PARTIAL.to_string());

    let output = HandlebarsEngine.render(TEMPLATE, &data, &partials)?;
    println!("{output}");
    Ok(())
}
