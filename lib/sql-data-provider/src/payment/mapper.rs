use campus_core::model::payment::{
    Payment, PaymentFilter, SortablePaymentColumn,
};
use sea_orm::IntoSimpleExpr;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Set};

use crate::entity::payment;
use crate::list_query::{IntoFilterCondition, IntoSortingColumn};

impl From<Payment> for payment::ActiveModel {
    fn from(value: Payment) -> Self {
        Self {
            id: Set(value.id),
            created_date: Set(value.created_date),
            student_id: Set(value.student_id),
            group_id: Set(value.group_id),
            amount: Set(value.amount),
            payment_type: Set(value.payment_type.into()),
            payment_date: Set(value.payment_date),
            due_date: Set(value.due_date),
            receipt_number: Set(value.receipt_number),
            document_path: Set(value.document_path),
            paid_by_id: Set(value.paid_by_id),
            notes: Set(value.notes),
        }
    }
}

impl From<payment::Model> for Payment {
    fn from(value: payment::Model) -> Self {
        Self {
            id: value.id,
            created_date: value.created_date,
            student_id: value.student_id,
            group_id: value.group_id,
            amount: value.amount,
            payment_type: value.payment_type.into(),
            payment_date: value.payment_date,
            due_date: value.due_date,
            receipt_number: value.receipt_number,
            document_path: value.document_path,
            paid_by_id: value.paid_by_id,
            notes: value.notes,
        }
    }
}

impl IntoSortingColumn for SortablePaymentColumn {
    fn get_column(&self) -> SimpleExpr {
        match self {
            Self::PaymentDate => payment::Column::PaymentDate,
            Self::Amount => payment::Column::Amount,
            Self::CreatedDate => payment::Column::CreatedDate,
        }
        .into_simple_expr()
    }
}

impl IntoFilterCondition for PaymentFilter {
    fn get_condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(student_id) = self.student_id {
            condition = condition.add(payment::Column::StudentId.eq(student_id));
        }
        if let Some(group_id) = self.group_id {
            condition = condition.add(payment::Column::GroupId.eq(group_id));
        }
        if let Some(payment_type) = self.payment_type {
            condition = condition
                .add(payment::Column::PaymentType.eq(payment::PaymentType::from(payment_type)));
        }
        if let Some(after) = self.payment_date_after {
            condition = condition.add(payment::Column::PaymentDate.gte(after));
        }
        if let Some(before) = self.payment_date_before {
            condition = condition.add(payment::Column::PaymentDate.lte(before));
        }
        condition
    }
}
