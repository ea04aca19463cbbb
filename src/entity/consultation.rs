/// Doctor consultations (`/api/konsultasi`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{ColumnDef, Record};
use crate::value::Value;

/// One consultation request between a patient and a doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: i64,
    #[serde(rename = "nama_user")]
    pub patient: String,
    #[serde(rename = "nama_dokter")]
    pub doctor: String,
    #[serde(rename = "topik")]
    pub topic: String,
    #[serde(rename = "tanggal_konsultasi")]
    pub date: DateTime<Utc>,
    #[serde(rename = "status_konsultasi")]
    pub status: ConsultationStatus,
    #[serde(rename = "catatan", default)]
    pub note: Option<String>,
    /// The doctor's reply, once one was written.
    #[serde(rename = "balasan", default)]
    pub reply: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsultationStatus {
    #[serde(rename = "menunggu")]
    Pending,
    #[serde(rename = "diterima")]
    Accepted,
    #[serde(rename = "selesai")]
    Completed,
    #[serde(rename = "dibatalkan")]
    Cancelled,
}

impl ConsultationStatus {
    pub const ALL: [ConsultationStatus; 4] = [
        ConsultationStatus::Pending,
        ConsultationStatus::Accepted,
        ConsultationStatus::Completed,
        ConsultationStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "menunggu",
            ConsultationStatus::Accepted => "diterima",
            ConsultationStatus::Completed => "selesai",
            ConsultationStatus::Cancelled => "dibatalkan",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConsultationStatus::Pending => "Menunggu",
            ConsultationStatus::Accepted => "Diterima",
            ConsultationStatus::Completed => "Selesai",
            ConsultationStatus::Cancelled => "Dibatalkan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsultationField {
    Id,
    Patient,
    Doctor,
    Topic,
    Date,
    Status,
    Note,
    Reply,
}

impl Record for Consultation {
    type Field = ConsultationField;

    fn get(&self, field: ConsultationField) -> Value {
        match field {
            ConsultationField::Id => self.id.into(),
            ConsultationField::Patient => self.patient.clone().into(),
            ConsultationField::Doctor => self.doctor.clone().into(),
            ConsultationField::Topic => self.topic.clone().into(),
            ConsultationField::Date => self.date.into(),
            ConsultationField::Status => self.status.as_str().into(),
            ConsultationField::Note => self.note.clone().into(),
            ConsultationField::Reply => self.reply.clone().into(),
        }
    }
}

impl Consultation {
    pub fn columns() -> Vec<ColumnDef<Consultation>> {
        vec![
            ColumnDef::new(ConsultationField::Id, "ID"),
            ColumnDef::new(ConsultationField::Patient, "Nama User"),
            ColumnDef::new(ConsultationField::Doctor, "Nama Dokter"),
            ColumnDef::new(ConsultationField::Topic, "Topik"),
            ColumnDef::new(ConsultationField::Date, "Tanggal"),
            ColumnDef::new(ConsultationField::Status, "Status").with_render(status_cell),
            ColumnDef::new(ConsultationField::Note, "Catatan"),
            ColumnDef::new(ConsultationField::Reply, "Balasan"),
        ]
    }

    /// Columns for the CSV export, with the export's header names.
    pub fn export_columns() -> Vec<ColumnDef<Consultation>> {
        vec![
            ColumnDef::new(ConsultationField::Id, "ID"),
            ColumnDef::new(ConsultationField::Patient, "User"),
            ColumnDef::new(ConsultationField::Doctor, "Dokter"),
            ColumnDef::new(ConsultationField::Topic, "Topik"),
            ColumnDef::new(ConsultationField::Date, "Tanggal"),
            ColumnDef::new(ConsultationField::Status, "Status"),
            ColumnDef::new(ConsultationField::Note, "Catatan"),
            ColumnDef::new(ConsultationField::Reply, "Balasan"),
        ]
    }

    pub fn search_fields() -> Vec<ConsultationField> {
        vec![ConsultationField::Topic]
    }
}

/// Body of the reply/update call (`PUT /api/konsultasi/{id}`). The replying
/// doctor's id is taken from the session user.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultationUpdate {
    #[serde(rename = "status_konsultasi")]
    pub status: ConsultationStatus,
    #[serde(rename = "catatan")]
    pub note: String,
    #[serde(rename = "balasan")]
    pub reply: String,
    #[serde(rename = "topik")]
    pub topic: String,
    #[serde(rename = "id_dokter")]
    pub doctor_id: i64,
}

fn status_cell(consultation: &Consultation) -> String {
    consultation.status.label().to_string()
}
