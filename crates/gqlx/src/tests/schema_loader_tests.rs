use crate::schema_loader;

#[test]
fn loads_every_schema_file_in_a_directory() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("query.graphql"), "type Query { user: User }")?;
    std::fs::create_dir(dir.path().join("nested"))?;
    std::fs::write(dir.path().join("nested/user.graphqls"), "type User { id: ID! }")?;
    std::fs::write(dir.path().join("README.md"), "not a schema")?;

    let schema = schema_loader::load_schema(dir.path())?;
    assert!(schema.contains_type("Query"));
    assert!(schema.contains_type("User"));
    Ok(())
}

#[test]
fn extensions_may_precede_their_base_type() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("a_ext.graphql"), "extend type Query { extra: Int }")?;
    std::fs::write(dir.path().join("b_query.graphql"), "type Query { id: ID }")?;

    let schema = schema_loader::load_schema(dir.path())?;
    let query = schema.type_node("Query").expect("Query is loaded");
    assert_eq!(query.fields().count(), 2);
    Ok(())
}

#[test]
fn directory_without_schema_files_fails() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("notes.txt"), "nothing here")?;

    let err = schema_loader::load_schema(dir.path())
        .expect_err("an empty directory is rejected");
    assert!(err.to_string().contains("no schema files"));
    Ok(())
}

#[test]
fn syntax_errors_fail_the_load() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.graphql");
    std::fs::write(&path, "type Query {")?;

    assert!(schema_loader::load_schema(&path).is_err());
    Ok(())
}
