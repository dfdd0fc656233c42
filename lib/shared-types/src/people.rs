use crate::macros::id_newtype;

id_newtype! {
    /// Id of a login principal.
    UserId
}

id_newtype!(ProfileId);
id_newtype!(TeacherId);
id_newtype!(StudentId);
id_newtype!(LeadId);
id_newtype!(NotificationId);
