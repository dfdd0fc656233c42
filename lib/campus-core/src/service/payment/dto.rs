use shared_types::{GroupId, StudentId};
use time::Date;

use crate::model::payment::PaymentType;

#[derive(Clone, Debug)]
pub struct CreatePaymentRequest {
    pub student_id: StudentId,
    pub group_id: GroupId,
    /// Minor currency units.
    pub amount: i64,
    pub payment_type: PaymentType,
    pub due_date: Date,
    pub receipt_number: String,
    pub document_path: Option<String>,
    pub notes: String,
}
