use crate::macros::id_newtype;

id_newtype! {
    /// Id of an educational center, the tenant root.
    CenterId
}

id_newtype!(BranchId);
id_newtype!(SubjectId);
id_newtype!(RoomId);
id_newtype!(GroupId);
