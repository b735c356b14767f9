use team_tracker_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use team_tracker_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::goals;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    async fn insert(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let new_goal_db: NewGoalDB = new_goal.into();

                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Goal::try_from(result_db)
            })
            .await
    }

    fn get_by_id(&self, goal_id: i32) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        goals::table
            .find(goal_id)
            .select(GoalDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .map(Goal::try_from)
            .transpose()
    }

    async fn toggle_completion(&self, goal_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::update(goals::table.find(goal_id))
                    .set(goals::is_completed.eq(diesel::dsl::not(goals::is_completed)))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete(&self, goal_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(goals::table.find(goal_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashSet;
    use team_tracker_core::errors::Error;
    use tempfile::tempdir;

    async fn create_test_repository() -> (GoalRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (GoalRepository::new(pool, writer), temp_dir)
    }

    fn new_goal(member: i32, text: &str) -> NewGoal {
        NewGoal::new(
            member,
            text.to_string(),
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let (repo, _temp_dir) = create_test_repository().await;

        let first = repo.insert(new_goal(1, "Ship v1")).await.unwrap();
        assert_eq!(first.team_member_id, 1);
        assert_eq!(first.goal_text, "Ship v1");
        assert!(!first.is_completed);
        assert_eq!(
            first.created_at,
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
        );

        // Deleted ids are not handed out again.
        repo.delete(first.id).await.unwrap();
        let mut ids = HashSet::from([first.id]);
        for n in 0..3 {
            let goal = repo.insert(new_goal(2, &format!("goal {n}"))).await.unwrap();
            assert!(ids.insert(goal.id));
        }
    }

    #[tokio::test]
    async fn test_insert_for_missing_member_violates_foreign_key() {
        let (repo, _temp_dir) = create_test_repository().await;
        let err = repo.insert(new_goal(99999, "orphan")).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));
    }

    #[tokio::test]
    async fn test_get_by_id_round_trips() {
        let (repo, _temp_dir) = create_test_repository().await;
        let created = repo.insert(new_goal(3, "Read a book")).await.unwrap();

        let fetched = repo.get_by_id(created.id).unwrap();
        assert_eq!(fetched, Some(created));
        assert_eq!(repo.get_by_id(12345).unwrap(), None);
    }

    #[tokio::test]
    async fn test_toggle_completion_flips_and_reports_rows() {
        let (repo, _temp_dir) = create_test_repository().await;
        let goal = repo.insert(new_goal(1, "Toggle me")).await.unwrap();

        assert_eq!(repo.toggle_completion(goal.id).await.unwrap(), 1);
        assert!(repo.get_by_id(goal.id).unwrap().unwrap().is_completed);

        assert_eq!(repo.toggle_completion(goal.id).await.unwrap(), 1);
        assert!(!repo.get_by_id(goal.id).unwrap().unwrap().is_completed);

        assert_eq!(repo.toggle_completion(goal.id + 100).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let (repo, _temp_dir) = create_test_repository().await;
        let goal = repo.insert(new_goal(1, "Delete me")).await.unwrap();

        assert_eq!(repo.delete(goal.id).await.unwrap(), 1);
        assert_eq!(repo.delete(goal.id).await.unwrap(), 0);
        assert_eq!(repo.get_by_id(goal.id).unwrap(), None);
    }

    #[tokio::test]
    async fn test_created_at_keeps_second_precision() {
        let (repo, _temp_dir) = create_test_repository().await;
        let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap() + Duration::seconds(59);
        let goal = repo
            .insert(NewGoal::new(1, "precise".to_string(), created_at))
            .await
            .unwrap();
        assert_eq!(repo.get_by_id(goal.id).unwrap().unwrap().created_at, created_at);
    }
}
