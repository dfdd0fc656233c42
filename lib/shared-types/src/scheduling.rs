use crate::macros::id_newtype;

id_newtype!(LessonId);
id_newtype!(AttendanceId);
id_newtype!(AssignmentId);
id_newtype!(SubmissionId);
id_newtype!(ExamId);
id_newtype!(ExamResultId);
id_newtype!(PaymentId);
id_newtype!(ContractId);
