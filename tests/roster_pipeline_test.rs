use anyhow::Result;
use person_roster::roster;
use tempfile::TempDir;

#[tokio::test]
async fn create_csv_writes_header_and_requested_rows() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("people.csv");
    let path = path.to_str().unwrap();

    roster::create_csv(path, 25).await?;

    let contents = tokio::fs::read_to_string(path).await?;
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("first_name,last_name,age"));
    assert_eq!(lines.count(), 25);

    Ok(())
}

#[tokio::test]
async fn build_roster_keeps_fields_verbatim() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("people.csv");
    let output = temp_dir.path().join("roster.txt");

    tokio::fs::write(
        &input,
        "first_name,last_name,age\n\
         Ada,Lovelace,36\n\
         ,Turing,41\n\
         Grace,Hopper,85\n\
         Edsger,Dijkstra,unknown\n",
    )
    .await?;

    roster::build_roster(input.to_str().unwrap(), output.to_str().unwrap()).await?;

    let roster = tokio::fs::read_to_string(&output).await?;
    let lines: Vec<&str> = roster.lines().collect();

    // The reader forwards records concurrently, so line order is not fixed
    assert_eq!(lines.len(), 4);
    assert!(lines.contains(&"Ada Lovelace (36)"));
    // An empty first name keeps its separating space
    assert!(lines.contains(&" Turing (41)"));
    assert!(lines.contains(&"Grace Hopper (85)"));
    // An unparsable age falls back to 0
    assert!(lines.contains(&"Edsger Dijkstra (0)"));

    Ok(())
}

#[tokio::test]
async fn generated_people_all_end_up_on_the_roster() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("people.csv");
    let output = temp_dir.path().join("roster.txt");

    roster::create_csv(input.to_str().unwrap(), 2_500).await?;
    roster::build_roster(input.to_str().unwrap(), output.to_str().unwrap()).await?;

    let roster = tokio::fs::read_to_string(&output).await?;
    let lines: Vec<&str> = roster.lines().collect();

    assert_eq!(lines.len(), 2_500);
    for line in lines {
        assert!(line.contains(' '));
        assert!(line.ends_with(')'));
    }

    Ok(())
}

#[tokio::test]
async fn build_roster_fails_on_a_missing_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("nowhere.csv");
    let output = temp_dir.path().join("roster.txt");

    let result = roster::build_roster(input.to_str().unwrap(), output.to_str().unwrap()).await;

    assert!(result.is_err());

    Ok(())
}
