/*!
 * 请求方认证中间件
 *
 * 从 `X-Principal` 请求头解析请求方身份，并校验其角色是否符合路由作用域。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App, HttpServer};
 * use crate::middlewares::RequirePrincipal;
 * use crate::models::principals::entities::PrincipalRole;
 *
 * HttpServer::new(|| {
 *     App::new()
 *         .service(
 *             web::scope("/student")
 *                 .wrap(RequirePrincipal::new(PrincipalRole::Student))
 *                 .route("/assignments", web::get().to(list_assignments))
 *         )
 * })
 * ```
 *
 * 在处理程序中提取请求方：
 *
 * ```rust,ignore
 * async fn list_assignments(req: HttpRequest) -> Result<HttpResponse> {
 *     if let Some(principal) = RequirePrincipal::extract_principal(&req) {
 *         // ...
 *     }
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中携带 `X-Principal: {"user_id": 1, "student_id": 1}`
 * 2. 请求头缺失、JSON 非法或角色 ID 不唯一时返回 401
 * 3. 角色与路由作用域不符时返回 403
 * 4. 通过后将 `Principal` 存入请求扩展，继续处理请求
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use crate::errors::{Result, WorkflowError};
use crate::models::{
    ErrorCode,
    principals::entities::{Principal, PrincipalRole},
};

use super::create_error_response;

pub const PRINCIPAL_HEADER: &str = "X-Principal";

#[derive(Clone)]
pub struct RequirePrincipal {
    required_role: PrincipalRole,
}

impl RequirePrincipal {
    /// 创建要求特定角色的中间件
    pub fn new(role: PrincipalRole) -> Self {
        Self {
            required_role: role,
        }
    }
}

// 辅助函数：提取并解析请求方
fn extract_principal_from_header(req: &ServiceRequest) -> Result<Principal> {
    let raw = req
        .headers()
        .get(PRINCIPAL_HEADER)
        .ok_or_else(|| WorkflowError::authentication("Missing X-Principal header"))?
        .to_str()
        .map_err(|_| WorkflowError::authentication("X-Principal header is not valid text"))?;

    Principal::from_header_value(raw)
}

impl<S, B> Transform<S, ServiceRequest> for RequirePrincipal
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequirePrincipalMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequirePrincipalMiddleware {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

pub struct RequirePrincipalMiddleware<S> {
    service: Rc<S>,
    required_role: PrincipalRole,
}

impl<S, B> Service<ServiceRequest> for RequirePrincipalMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::result::Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let required_role = self.required_role;

        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match extract_principal_from_header(&req) {
                Ok(principal) if principal.role() == required_role => {
                    debug!(
                        "Principal authenticated: {} (user {})",
                        principal.role(),
                        principal.user_id()
                    );
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Ok(principal) => {
                    info!(
                        "Access denied for user {} (role: {}). Required role: {}",
                        principal.user_id(),
                        principal.role(),
                        required_role
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::FORBIDDEN,
                            ErrorCode::Forbidden,
                            &format!("requester should be {required_role}"),
                        )
                        .map_into_right_body(),
                    ))
                }
                Err(err) => {
                    info!(
                        "Principal authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            err.message(),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取请求方
impl RequirePrincipal {
    /// 从请求扩展中提取请求方
    /// 此函数应该在应用了RequirePrincipal中间件的路由处理程序中使用
    pub fn extract_principal(req: &actix_web::HttpRequest) -> Option<Principal> {
        req.extensions().get::<Principal>().copied()
    }
}
