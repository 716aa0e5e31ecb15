use twenty_metadata_client::twenty::serviceclient::ServiceClient;

pub async fn run(client: &ServiceClient, name: &str) -> Result<(), String> {
    println!("Searching for field '{}'...", name);

    let fields = match client.find_fields_by_name(name).await {
        Ok(fields) => fields,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let Some(field) = fields.first() else {
        println!("Not found by name.");
        return Ok(());
    };

    println!("FOUND ID: {}", field.id);
    println!(
        "Object ID: {}",
        field.object_metadata_id.as_deref().unwrap_or("unknown")
    );
    if let Some(field_type) = &field.field_type {
        println!("Type: {}", field_type);
    }
    let options = serde_json::to_string_pretty(&field.options).map_err(|e| e.to_string())?;
    println!("Current Options: {}", options);

    Ok(())
}
