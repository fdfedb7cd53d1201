use crate::errors::AppError;

/// 아무 문자도 남지 않는 사용자명에 대한 슬러그
pub const FALLBACK_SLUG: &str = "user";

/// 필수 문자열 필드가 비어 있지 않은지 확인합니다.
///
/// 공백만 있는 값도 누락으로 취급합니다. 값은 변경 없이 그대로 반환합니다.
pub fn require_field<'a>(value: &'a str, field_name: &str) -> Result<&'a str, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(value)
}

/// 값이 있고 빈 문자열이 아닌 경우에만 반환합니다.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// 사용자명에서 URL 안전한 슬러그를 파생합니다.
///
/// 소문자로 바꾸고, 영숫자가 아닌 문자의 연속은 하나의 `-` 로 바꾸며,
/// 양 끝의 `-` 를 제거합니다.
pub fn slugify(seed: &str) -> String {
    let mut slug = String::with_capacity(seed.len());
    let mut pending_dash = false;

    for c in seed.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// `attempt` 번째 슬러그 후보. 첫 시도는 기본 슬러그, 이후 `-2`, `-3`, ...
pub fn slug_candidate(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}
