use shared_types::{GroupId, PaymentId, ProfileId, StudentId};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use super::common::ListQuery;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, EnumString)]
pub enum PaymentType {
    Cash,
    Card,
    BankTransfer,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    pub created_date: OffsetDateTime,
    pub student_id: StudentId,
    pub group_id: GroupId,
    /// Minor currency units.
    pub amount: i64,
    pub payment_type: PaymentType,
    pub payment_date: Date,
    pub due_date: Date,
    pub receipt_number: String,
    pub document_path: Option<String>,
    pub paid_by_id: Option<ProfileId>,
    pub notes: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortablePaymentColumn {
    PaymentDate,
    Amount,
    CreatedDate,
}

#[derive(Clone, Debug, Default)]
pub struct PaymentFilter {
    pub student_id: Option<StudentId>,
    pub group_id: Option<GroupId>,
    pub payment_type: Option<PaymentType>,
    pub payment_date_after: Option<Date>,
    pub payment_date_before: Option<Date>,
}

pub type PaymentListQuery = ListQuery<SortablePaymentColumn, PaymentFilter>;

/// Sum and row count over a filtered payment set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PaymentTotals {
    /// Minor currency units.
    pub amount: i64,
    pub count: u64,
}
