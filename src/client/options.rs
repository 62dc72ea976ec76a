use crate::client::{display_to_param, ExtendParams, Params};
use strum::Display;

#[derive(Clone, Copy, Debug, Default)]
pub struct PaginationOptions {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl PaginationOptions {
    pub fn new(per_page: u32, page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: Some(page),
        }
    }
}

impl ExtendParams for PaginationOptions {
    fn extend_params(&self, params: &mut Params) {
        params.set("per_page", self.per_page).set("page", self.page);
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum SortPages {
    Created,
    Updated,
    Comments,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum SortDirection {
    #[strum(serialize = "asc")]
    Ascending,
    #[strum(serialize = "desc")]
    Descending,
}

display_to_param!(StateFilter, SortPages, SortDirection);

#[cfg(test)]
mod test {
    use super::{PaginationOptions, SortDirection, StateFilter};
    use crate::client::{ParamValue, Params, ToParam};

    #[test]
    fn wire_names() {
        assert_eq!(
            StateFilter::Closed.to_param(),
            ParamValue::Scalar("closed".to_owned())
        );
        assert_eq!(
            SortDirection::Ascending.to_param(),
            ParamValue::Scalar("asc".to_owned())
        );
    }

    #[test]
    fn pagination_leaves_unset_fields_absent() {
        let options = PaginationOptions {
            per_page: Some(100),
            page: None,
        };
        let params = Params::new().extend_from(&options);

        assert_eq!(
            params.get("per_page"),
            Some(&ParamValue::Scalar("100".to_owned()))
        );
        assert_eq!(params.get("page"), Some(&ParamValue::Absent));
    }
}
