/// Accounts (`/api/users`).
///
/// The backend keeps two account tables, `admin` (admins and doctors) and
/// `users` (customers), and merges them for the management page. Row-level
/// calls must name the source table again via the `tbname` query parameter,
/// so every row carries its [`AccountTable`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{ColumnDef, Record};
use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nama")]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "alamat")]
    pub address: String,
    #[serde(rename = "jenis_kelamin")]
    pub gender: Gender,
    #[serde(rename = "tanggal_lahir")]
    pub birth_date: DateTime<Utc>,
    #[serde(rename = "peran")]
    pub role: Role,
    #[serde(rename = "sumber")]
    pub source: AccountTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Laki-laki")]
    Male,
    #[serde(rename = "Perempuan")]
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "dokter")]
    Doctor,
    #[serde(rename = "pengguna")]
    Customer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Doctor, Role::Customer];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "dokter",
            Role::Customer => "pengguna",
        }
    }

    /// Roles an account of the given source table may hold. Admin-table
    /// accounts are admins or doctors; customer accounts stay customers.
    pub fn admissible_for(table: AccountTable) -> &'static [Role] {
        match table {
            AccountTable::Admin => &[Role::Admin, Role::Doctor],
            AccountTable::Users => &[Role::Customer],
        }
    }
}

/// Which backend table an account row lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountTable {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "users")]
    Users,
}

impl AccountTable {
    /// Value of the `tbname` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            AccountTable::Admin => "admin",
            AccountTable::Users => "users",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Name,
    Email,
    Password,
    Address,
    Gender,
    BirthDate,
    Role,
    Source,
}

impl Record for User {
    type Field = UserField;

    fn get(&self, field: UserField) -> Value {
        match field {
            UserField::Id => self.id.into(),
            UserField::Name => self.name.clone().into(),
            UserField::Email => self.email.clone().into(),
            UserField::Password => self.password.clone().into(),
            UserField::Address => self.address.clone().into(),
            UserField::Gender => self.gender.as_str().into(),
            UserField::BirthDate => self.birth_date.into(),
            UserField::Role => self.role.as_str().into(),
            UserField::Source => self.source.as_str().into(),
        }
    }
}

impl User {
    pub fn columns() -> Vec<ColumnDef<User>> {
        vec![
            ColumnDef::new(UserField::Id, "ID"),
            ColumnDef::new(UserField::Name, "Nama"),
            ColumnDef::new(UserField::Email, "Email"),
            ColumnDef::new(UserField::Password, "Password")
                .with_render(masked_password)
                .not_sortable(),
            ColumnDef::new(UserField::Address, "Alamat"),
            ColumnDef::new(UserField::Gender, "Jenis Kelamin"),
            ColumnDef::new(UserField::BirthDate, "Tanggal Lahir"),
            ColumnDef::new(UserField::Role, "Peran"),
            ColumnDef::new(UserField::Source, "Sumber"),
        ]
    }

    pub fn search_fields() -> Vec<UserField> {
        vec![UserField::Name, UserField::Email]
    }
}

/// Body of the account edit call (`PUT /api/users/{id}?tbname=...`). The id
/// and source table travel in the URL, never in the body.
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
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

/// Passwords never render in clear text.
fn masked_password(_user: &User) -> String {
    "•••••••".to_string()
}
