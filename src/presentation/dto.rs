use serde::Deserialize;

use crate::data::post_repository::PostFilter;

/// Body of `PUT /api/posts/{id}`. Both fields are required by the typed
/// deserialization; this path does not go through the schema validator.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub body: String,
}

/// Querystring filters for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    pub title_like: Option<String>,
    pub body_like: Option<String>,
}

impl ListPostsQuery {
    /// Title takes precedence whenever both parameters are supplied; the
    /// combined title-and-body branch is unreachable on purpose. Empty
    /// parameters count as absent.
    pub fn into_filter(self) -> Option<PostFilter> {
        let title_like = self.title_like.filter(|s| !s.is_empty());
        let body_like = self.body_like.filter(|s| !s.is_empty());

        if let Some(title) = title_like {
            Some(PostFilter::TitleContains(title))
        } else if let Some(body) = body_like {
            Some(PostFilter::BodyContains(body))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(title_like: Option<&str>, body_like: Option<&str>) -> ListPostsQuery {
        ListPostsQuery {
            title_like: title_like.map(str::to_owned),
            body_like: body_like.map(str::to_owned),
        }
    }

    #[test]
    fn no_parameters_means_no_filter() {
        assert_eq!(query(None, None).into_filter(), None);
    }

    #[test]
    fn title_alone_filters_by_title() {
        assert_eq!(
            query(Some("Apple"), None).into_filter(),
            Some(PostFilter::TitleContains("Apple".into()))
        );
    }

    #[test]
    fn body_alone_filters_by_body() {
        assert_eq!(
            query(None, Some("fruit")).into_filter(),
            Some(PostFilter::BodyContains("fruit".into()))
        );
    }

    #[test]
    fn title_wins_when_both_are_supplied() {
        assert_eq!(
            query(Some("Apple"), Some("fruit")).into_filter(),
            Some(PostFilter::TitleContains("Apple".into()))
        );
    }

    #[test]
    fn empty_title_falls_through_to_body() {
        assert_eq!(
            query(Some(""), Some("fruit")).into_filter(),
            Some(PostFilter::BodyContains("fruit".into()))
        );
    }
}
