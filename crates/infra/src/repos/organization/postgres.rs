use super::IOrganizationRepo;
use sharealarm_domain::{Organization, OrganizationSettings, PEMKey, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};

pub struct PostgresOrganizationRepo {
    pool: PgPool,
}

impl PostgresOrganizationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct OrganizationRaw {
    org_uid: Uuid,
    name: String,
    secret_api_key: String,
    public_jwt_key: Option<String>,
    settings: Json<OrganizationSettings>,
}

impl Into<Organization> for OrganizationRaw {
    fn into(self) -> Organization {
        Organization {
            id: self.org_uid.into(),
            name: self.name,
            secret_api_key: self.secret_api_key,
            public_jwt_key: self.public_jwt_key.and_then(|key| PEMKey::new(key).ok()),
            settings: self.settings.0,
        }
    }
}

#[async_trait::async_trait]
impl IOrganizationRepo for PostgresOrganizationRepo {
    async fn insert(&self, org: &Organization) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO organizations
            (org_uid, name, secret_api_key, public_jwt_key, settings)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(org.id.inner_ref())
        .bind(&org.name)
        .bind(&org.secret_api_key)
        .bind(org.public_jwt_key.as_ref().map(|key| key.as_str().to_string()))
        .bind(Json(&org.settings))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, org: &Organization) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE organizations
            SET name = $2, secret_api_key = $3, public_jwt_key = $4, settings = $5
            WHERE org_uid = $1
            "#,
        )
        .bind(org.id.inner_ref())
        .bind(&org.name)
        .bind(&org.secret_api_key)
        .bind(org.public_jwt_key.as_ref().map(|key| key.as_str().to_string()))
        .bind(Json(&org.settings))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, org_id: &ID) -> Option<Organization> {
        sqlx::query_as::<_, OrganizationRaw>(
            r#"
            SELECT * FROM organizations
            WHERE org_uid = $1
            "#,
        )
        .bind(org_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|org| org.into())
    }

    async fn find_by_apikey(&self, api_key: &str) -> Option<Organization> {
        sqlx::query_as::<_, OrganizationRaw>(
            r#"
            SELECT * FROM organizations
            WHERE secret_api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|org| org.into())
    }

    async fn delete(&self, org_id: &ID) -> Option<Organization> {
        sqlx::query_as::<_, OrganizationRaw>(
            r#"
            DELETE FROM organizations
            WHERE org_uid = $1
            RETURNING *
            "#,
        )
        .bind(org_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|org| org.into())
    }
}
