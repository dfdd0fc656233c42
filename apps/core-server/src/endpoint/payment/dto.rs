use campus_core::model::payment::Payment;
use campus_core::service::payment::dto::CreatePaymentRequest;
use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::{GroupId, PaymentId, ProfileId, StudentId};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use crate::dto::common::{GetListResponseRestDTO, ListQueryParamsRest};

#[derive(Clone, Debug, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into(CreatePaymentRequest)]
pub(crate) struct CreatePaymentRequestRestDTO {
    pub student_id: StudentId,
    pub group_id: GroupId,
    /// Minor currency units.
    pub amount: i64,
    pub payment_type: PaymentTypeRestEnum,
    pub due_date: Date,
    pub receipt_number: String,
    pub document_path: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(Payment)]
pub(crate) struct PaymentResponseRestDTO {
    pub id: PaymentId,
    pub created_date: OffsetDateTime,
    pub student_id: StudentId,
    pub group_id: GroupId,
    pub amount: i64,
    pub payment_type: PaymentTypeRestEnum,
    pub payment_date: Date,
    pub due_date: Date,
    pub receipt_number: String,
    pub document_path: Option<String>,
    pub paid_by_id: Option<ProfileId>,
    pub notes: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from("campus_core::model::payment::PaymentType")]
#[into("campus_core::model::payment::PaymentType")]
pub(crate) enum PaymentTypeRestEnum {
    Cash,
    Card,
    BankTransfer,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, ToSchema, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::payment::SortablePaymentColumn")]
pub(crate) enum SortablePaymentColumnRestDTO {
    PaymentDate,
    Amount,
    CreatedDate,
}

#[derive(Clone, Debug, Deserialize, IntoParams, Into)]
#[serde(rename_all = "camelCase")]
#[into("campus_core::model::payment::PaymentFilter")]
pub(crate) struct PaymentFilterQueryParamsRest {
    #[param(nullable = false)]
    pub student_id: Option<StudentId>,
    #[param(nullable = false)]
    pub group_id: Option<GroupId>,
    #[param(inline, nullable = false)]
    #[into(with_fn = convert_inner)]
    pub payment_type: Option<PaymentTypeRestEnum>,
    #[param(nullable = false)]
    pub payment_date_after: Option<Date>,
    #[param(nullable = false)]
    pub payment_date_before: Option<Date>,
}

pub(crate) type GetPaymentsQuery =
    ListQueryParamsRest<PaymentFilterQueryParamsRest, SortablePaymentColumnRestDTO>;

pub(crate) type GetPaymentListResponseRestDTO = GetListResponseRestDTO<PaymentResponseRestDTO>;
