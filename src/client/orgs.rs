use crate::client::{
    display_to_param, Body, Client, ExtendParams, PaginationOptions, Params, RawResponse, Result,
};
use serde::Serialize;
use strum::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MembershipRole {
    Admin,
    Member,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum MemberFilter {
    /// Members without two-factor authentication enabled
    #[strum(serialize = "2fa_disabled")]
    TwoFactorDisabled,
    All,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum MemberRoleFilter {
    All,
    Admin,
    Member,
}

display_to_param!(MembershipRole, MemberFilter, MemberRoleFilter);

#[derive(Clone, Copy, Debug, Default)]
pub struct ListMembersOptions {
    pub filter: Option<MemberFilter>,
    pub role: Option<MemberRoleFilter>,
    pub pagination_options: PaginationOptions,
}

impl ExtendParams for ListMembersOptions {
    fn extend_params(&self, params: &mut Params) {
        params.set("filter", self.filter).set("role", self.role);
        self.pagination_options.extend_params(params);
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct UpdateOrgRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Shown publicly on the organization profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Email address used for billing; not shown publicly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_organization_projects: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_repository_projects: Option<bool>,

    /// `read`, `write`, `admin` or `none`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_repository_permission: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_can_create_repositories: Option<bool>,
}

/// `OrgsClient` handles communication with the organization related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/orgs
pub struct OrgsClient<'a> {
    inner: &'a Client,
}

impl<'a> OrgsClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#get-an-organization
    pub async fn get(&self, org: &str) -> Result<RawResponse> {
        let params = Params::new().with("org", org);
        self.inner.get("/orgs/{org}", &params).await
    }

    /// Update an organization
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#update-an-organization
    pub async fn update(&self, org: &str, request: &UpdateOrgRequest) -> Result<RawResponse> {
        let params = Params::new().with("org", org);
        let body = Body::json(request)?;
        self.inner.patch("/orgs/{org}", &params, Some(body)).await
    }

    /// List organizations for the authenticated user
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#list-organizations-for-the-authenticated-user
    pub async fn list_for_authenticated_user(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new().extend_from(&options);
        self.inner.get("/user/orgs", &params).await
    }

    /// List public organization memberships for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/orgs#list-organizations-for-a-user
    pub async fn list_for_user(
        &self,
        username: &str,
        options: Option<PaginationOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new()
            .with("username", username)
            .extend_from(&options);
        self.inner.get("/users/{username}/orgs", &params).await
    }

    /// List organization members
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#list-organization-members
    pub async fn list_members(
        &self,
        org: &str,
        options: Option<ListMembersOptions>,
    ) -> Result<RawResponse> {
        let params = Params::new().with("org", org).extend_from(&options);
        self.inner.get("/orgs/{org}/members", &params).await
    }

    /// Check organization membership for a user. GitHub answers 204 for a member, 302 when the
    /// requester is not a member and 404 otherwise.
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#check-organization-membership-for-a-user
    pub async fn check_membership(&self, org: &str, username: &str) -> Result<RawResponse> {
        let params = Params::new().with("org", org).with("username", username);
        self.inner
            .get("/orgs/{org}/members/{username}", &params)
            .await
    }

    /// Remove an organization member
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#remove-an-organization-member
    pub async fn remove_member(&self, org: &str, username: &str) -> Result<RawResponse> {
        let params = Params::new().with("org", org).with("username", username);
        self.inner
            .delete("/orgs/{org}/members/{username}", &params, None)
            .await
    }

    /// Get organization membership for a user
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#get-organization-membership-for-a-user
    pub async fn get_membership(&self, org: &str, username: &str) -> Result<RawResponse> {
        let params = Params::new().with("org", org).with("username", username);
        self.inner
            .get("/orgs/{org}/memberships/{username}", &params)
            .await
    }

    /// Set organization membership for a user, inviting them if they are not yet a member
    ///
    /// GitHub API docs: https://docs.github.com/rest/orgs/members#set-organization-membership-for-a-user
    pub async fn set_membership(
        &self,
        org: &str,
        username: &str,
        role: Option<MembershipRole>,
    ) -> Result<RawResponse> {
        #[derive(Debug, Serialize)]
        struct SetMembershipRequest {
            #[serde(skip_serializing_if = "Option::is_none")]
            role: Option<MembershipRole>,
        }

        let params = Params::new().with("org", org).with("username", username);
        let body = Body::json(&SetMembershipRequest { role })?;
        self.inner
            .put("/orgs/{org}/memberships/{username}", &params, Some(body))
            .await
    }
}

#[cfg(test)]
mod test {
    use super::{ListMembersOptions, MemberFilter, MemberRoleFilter};
    use crate::client::{ParamValue, Params};

    #[test]
    fn member_filters() {
        let params = Params::new().extend_from(&ListMembersOptions {
            filter: Some(MemberFilter::TwoFactorDisabled),
            role: Some(MemberRoleFilter::Admin),
            ..Default::default()
        });

        assert_eq!(
            params.get("filter"),
            Some(&ParamValue::Scalar("2fa_disabled".to_owned()))
        );
        assert_eq!(
            params.get("role"),
            Some(&ParamValue::Scalar("admin".to_owned()))
        );
    }
}
