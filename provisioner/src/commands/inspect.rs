use twenty_metadata_client::twenty::graphql::IntrospectedField;
use twenty_metadata_client::twenty::serviceclient::ServiceClient;

pub async fn run(
    client: &ServiceClient,
    type_name: &str,
    needles: &[String],
) -> Result<(), String> {
    println!("=== Inspecting '{}' Object Metadata via GraphQL ===", type_name);

    let introspected = match client.introspect_type(type_name).await {
        Ok(Some(introspected)) => introspected,
        Ok(None) => {
            println!("Type '{}' is not in the schema.", type_name);
            return Ok(());
        }
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    };

    println!("Found {} fields on {}.", introspected.fields.len(), type_name);

    let matches = matching_fields(&introspected.fields, needles);
    if matches.is_empty() {
        println!("No fields matching {:?} found.", needles);
        let sample: Vec<&str> = introspected
            .fields
            .iter()
            .take(10)
            .map(|f| f.name.as_str())
            .collect();
        println!("Sample fields: {:?}", sample);
        return Ok(());
    }

    for field in matches {
        println!(
            "MATCH FOUND: {} (Type: {}/{})",
            field.name,
            field.field_type.name.as_deref().unwrap_or("-"),
            field.field_type.kind.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

fn matching_fields<'a>(
    fields: &'a [IntrospectedField],
    needles: &[String],
) -> Vec<&'a IntrospectedField> {
    let needles: Vec<String> = needles.iter().map(|n| n.to_lowercase()).collect();
    fields
        .iter()
        .filter(|field| {
            let name = field.name.to_lowercase();
            needles.iter().any(|needle| name.contains(needle))
        })
        .collect()
}
