/// Auth session owned by the application.
///
/// The backend hands out a token and the signed-in account on login and
/// signup. That pair is held as one explicit [`Session`] value: created when
/// the user signs in, installed into the client for the protected calls, and
/// dropped on logout. There is no ambient global session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{Gender, Role};

/// The signed-in account as the login endpoint returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    #[serde(rename = "nama")]
    pub name: String,
    pub email: String,
    #[serde(rename = "peran")]
    pub role: Role,
}

/// Wire shape of a successful login or signup: `{ user, token }`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: AuthUser,
    pub token: String,
}

/// An authenticated session: the bearer token plus the account it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    user: AuthUser,
    token: String,
}

impl Session {
    pub fn new(user: AuthUser, token: impl Into<String>) -> Self {
        Session {
            user,
            token: token.into(),
        }
    }

    pub fn user(&self) -> &AuthUser {
        &self.user
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session::new(response.user, response.token)
    }
}

/// Body of the signup call (`POST /api/signup?tbname=admin`).
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    #[serde(rename = "nama")]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "alamat")]
    pub address: String,
    #[serde(rename = "jenis_kelamin")]
    pub gender: Gender,
    #[serde(rename = "tanggal_lahir")]
    pub birth_date: NaiveDate,
    #[serde(rename = "peran")]
    pub role: Role,
}
