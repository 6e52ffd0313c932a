//! Shared fixtures for unit tests: a throwaway store plus raw-SQL seeding
//! for the child tables the DAO only reads.

use libsql::Connection;
use proj_core::entities::Project;
use rust_decimal::Decimal;
use tempfile::TempDir;

use crate::ProjectsDb;
use crate::binder::{Parameters, execute_statement, last_insert_id, query_scalar};

/// Fresh file-backed store. Keep the `TempDir` alive for the test's duration.
pub async fn test_db() -> (TempDir, ProjectsDb) {
    let dir = TempDir::new().unwrap();
    let db = ProjectsDb::open_local(dir.path().join("projects.db"))
        .await
        .unwrap();
    (dir, db)
}

pub fn deck() -> Project {
    Project {
        name: "Deck".to_string(),
        estimated_hours: Some(Decimal::new(1000, 2)),
        actual_hours: Some(Decimal::new(1200, 2)),
        difficulty: Some(3),
        notes: Some("Use treated lumber".to_string()),
        ..Project::default()
    }
}

async fn insert(conn: &Connection, sql: &str, params: Parameters) -> i64 {
    execute_statement(conn, sql, params).await.unwrap();
    last_insert_id(conn).await.unwrap()
}

pub async fn seed_material(
    db: &ProjectsDb,
    project_id: i64,
    name: &str,
    quantity: Option<i32>,
    cost: Option<Decimal>,
) -> i64 {
    let conn = db.connect().await.unwrap();
    insert(
        &conn,
        "INSERT INTO material (project_id, material_name, num_required, cost) VALUES (?1, ?2, ?3, ?4)",
        Parameters::new()
            .bind(1, &project_id)
            .bind(2, name)
            .bind(3, &quantity)
            .bind(4, &cost),
    )
    .await
}

pub async fn seed_step(db: &ProjectsDb, project_id: i64, text: &str, order: i32) -> i64 {
    let conn = db.connect().await.unwrap();
    insert(
        &conn,
        "INSERT INTO step (project_id, step_text, step_order) VALUES (?1, ?2, ?3)",
        Parameters::new()
            .bind(1, &project_id)
            .bind(2, text)
            .bind(3, &order),
    )
    .await
}

/// Insert a category and link it to the project.
pub async fn seed_category(db: &ProjectsDb, project_id: i64, name: &str) -> i64 {
    let conn = db.connect().await.unwrap();
    let category_id = insert(
        &conn,
        "INSERT INTO category (category_name) VALUES (?1)",
        Parameters::new().bind(1, name),
    )
    .await;
    execute_statement(
        &conn,
        "INSERT INTO project_category (project_id, category_id) VALUES (?1, ?2)",
        Parameters::new().bind(1, &project_id).bind(2, &category_id),
    )
    .await
    .unwrap();
    category_id
}

pub async fn count_rows(db: &ProjectsDb, table: &str) -> i64 {
    let conn = db.connect().await.unwrap();
    query_scalar(&conn, &format!("SELECT COUNT(*) FROM {table}"), Parameters::new())
        .await
        .unwrap()
}

pub async fn count_children(db: &ProjectsDb, table: &str, project_id: i64) -> i64 {
    let conn = db.connect().await.unwrap();
    query_scalar(
        &conn,
        &format!("SELECT COUNT(*) FROM {table} WHERE project_id = ?1"),
        Parameters::new().bind(1, &project_id),
    )
    .await
    .unwrap()
}
