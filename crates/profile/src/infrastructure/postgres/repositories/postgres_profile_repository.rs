// crates/profile/src/infrastructure/postgres/repositories/postgres_profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::Login;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::entities::UserProfile;
use crate::domain::params::{ProfilePatch, SortField};
use crate::domain::repositories::ProfileRepository;
use crate::infrastructure::postgres::rows::PostgresProfileRow;

pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Neutralise les métacaractères LIKE d'une sous-chaîne utilisateur
    fn escape_like(needle: &str) -> String {
        needle
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_")
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_active_by_username(&self, username: &Login) -> Result<Option<UserProfile>> {
        let sql = "SELECT * FROM user_profiles WHERE username = $1 AND soft_deleted = FALSE";

        let row = sqlx::query_as::<_, PostgresProfileRow>(sql)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<UserProfile>()?;

        Ok(row.map(UserProfile::from))
    }

    async fn insert(&self, profile: &UserProfile) -> Result<()> {
        let sql = r#"
            INSERT INTO user_profiles (
                username, name, avatar_url, location, bio,
                public_repos, public_gists, followers, following,
                created_at, updated_at, friends, soft_deleted
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#;

        let friends: Vec<String> = profile
            .friends
            .iter()
            .map(|f| f.as_str().to_string())
            .collect();

        sqlx::query(sql)
            .bind(profile.username.as_str())
            .bind(profile.name.as_deref())
            .bind(profile.avatar_url.as_deref())
            .bind(profile.location.as_deref())
            .bind(profile.bio.as_deref())
            .bind(profile.public_repos)
            .bind(profile.public_gists)
            .bind(profile.followers)
            .bind(profile.following)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .bind(&friends)
            .bind(profile.soft_deleted)
            .execute(&self.pool)
            .await
            .map_domain::<UserProfile>()?;

        Ok(())
    }

    async fn find_active_in(&self, usernames: &[Login]) -> Result<Vec<UserProfile>> {
        if usernames.is_empty() {
            return Ok(Vec::new());
        }

        let sql = r#"
            SELECT * FROM user_profiles
            WHERE soft_deleted = FALSE AND username = ANY($1)
            ORDER BY username
        "#;

        let names: Vec<String> = usernames.iter().map(|u| u.as_str().to_string()).collect();

        let rows = sqlx::query_as::<_, PostgresProfileRow>(sql)
            .bind(&names)
            .fetch_all(&self.pool)
            .await
            .map_domain::<UserProfile>()?;

        Ok(rows.into_iter().map(UserProfile::from).collect())
    }

    async fn replace_friends(&self, username: &Login, friends: &[Login]) -> Result<()> {
        let sql = r#"
            UPDATE user_profiles SET friends = $2
            WHERE username = $1 AND soft_deleted = FALSE
        "#;

        let names: Vec<String> = friends.iter().map(|f| f.as_str().to_string()).collect();

        let result = sqlx::query(sql)
            .bind(username.as_str())
            .bind(&names)
            .execute(&self.pool)
            .await
            .map_domain::<UserProfile>()?;

        if result.rows_affected() == 0 {
            // Le sujet a disparu entre le lookup et l'écriture
            return Err(UserProfile::not_found(username.as_str()));
        }

        Ok(())
    }

    async fn mark_soft_deleted(&self, username: &Login) -> Result<Option<UserProfile>> {
        let sql = r#"
            UPDATE user_profiles SET soft_deleted = TRUE
            WHERE username = $1 AND soft_deleted = FALSE
            RETURNING *
        "#;

        let row = sqlx::query_as::<_, PostgresProfileRow>(sql)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<UserProfile>()?;

        Ok(row.map(UserProfile::from))
    }

    async fn update_fields(
        &self,
        username: &Login,
        patch: &ProfilePatch,
    ) -> Result<Option<UserProfile>> {
        if patch.is_empty() {
            return self.find_active_by_username(username).await;
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE user_profiles SET ");
        let mut fields = qb.separated(", ");

        if let Some(v) = &patch.name {
            fields.push("name = ").push_bind_unseparated(v.clone());
        }
        if let Some(v) = &patch.avatar_url {
            fields.push("avatar_url = ").push_bind_unseparated(v.clone());
        }
        if let Some(v) = &patch.location {
            fields.push("location = ").push_bind_unseparated(v.clone());
        }
        if let Some(v) = &patch.bio {
            fields.push("bio = ").push_bind_unseparated(v.clone());
        }
        if let Some(v) = patch.public_repos {
            fields.push("public_repos = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.public_gists {
            fields.push("public_gists = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.followers {
            fields.push("followers = ").push_bind_unseparated(v);
        }
        if let Some(v) = patch.following {
            fields.push("following = ").push_bind_unseparated(v);
        }

        qb.push(" WHERE username = ");
        qb.push_bind(username.as_str());
        qb.push(" AND soft_deleted = FALSE RETURNING *");

        let row = qb
            .build_query_as::<PostgresProfileRow>()
            .fetch_optional(&self.pool)
            .await
            .map_domain::<UserProfile>()?;

        Ok(row.map(UserProfile::from))
    }

    async fn search_active(
        &self,
        username_contains: Option<&str>,
        location_contains: Option<&str>,
    ) -> Result<Vec<UserProfile>> {
        let sql = r#"
            SELECT * FROM user_profiles
            WHERE soft_deleted = FALSE
              AND ($1::TEXT IS NULL OR username ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR location ILIKE '%' || $2 || '%')
            ORDER BY username
        "#;

        let rows = sqlx::query_as::<_, PostgresProfileRow>(sql)
            .bind(username_contains.map(Self::escape_like))
            .bind(location_contains.map(Self::escape_like))
            .fetch_all(&self.pool)
            .await
            .map_domain::<UserProfile>()?;

        Ok(rows.into_iter().map(UserProfile::from).collect())
    }

    async fn list_active_sorted(&self, sort: SortField) -> Result<Vec<UserProfile>> {
        // `as_column` est une whitelist fermée, l'interpolation est sûre
        let sql = format!(
            "SELECT * FROM user_profiles WHERE soft_deleted = FALSE ORDER BY {} ASC",
            sort.as_column()
        );

        let rows = sqlx::query_as::<_, PostgresProfileRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_domain::<UserProfile>()?;

        Ok(rows.into_iter().map(UserProfile::from).collect())
    }
}
