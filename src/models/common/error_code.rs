/// 业务错误码
///
/// 高三位沿用 HTTP 状态码，低两位区分同一状态下的不同业务场景。
/// 仅以数值形式出现在响应外壳的 code 字段里。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    ValidationFailed = 40001,

    Unauthorized = 40100,
    AuthFailed = 40101,

    NotFound = 40400,
    SubmissionNotFound = 40401,
    ScoreNotFound = 40402,

    Conflict = 40900,
    AccountAlreadyExists = 40901,

    RateLimitExceeded = 42900,

    InternalServerError = 50000,
    DatabaseError = 50001,
}
