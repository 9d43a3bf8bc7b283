use super::*;

// =========================================================
// Guard: requires_auth routes
// =========================================================

#[test]
fn test_protected_routes_redirect_anonymous_to_login() {
    let protected = [
        AppRoute::Home,
        AppRoute::CollaborationRequests,
        AppRoute::Collaborations,
    ];

    for route in protected {
        assert_eq!(
            evaluate_guard(route.matched(), false),
            GuardDecision::RedirectTo(AppRoute::Login),
            "anonymous access to {} must redirect to login",
            route
        );
    }
}

#[test]
fn test_protected_routes_allow_authenticated() {
    let protected = [
        AppRoute::Home,
        AppRoute::CollaborationRequests,
        AppRoute::Collaborations,
    ];

    for route in protected {
        assert_eq!(evaluate_guard(route.matched(), true), GuardDecision::Allow);
    }
}

// =========================================================
// Guard: requires_visitor routes
// =========================================================

#[test]
fn test_visitor_routes_redirect_authenticated_to_home() {
    let visitor_only = [AppRoute::Landing, AppRoute::Register, AppRoute::Login];

    for route in visitor_only {
        assert_eq!(
            evaluate_guard(route.matched(), true),
            GuardDecision::RedirectTo(AppRoute::Home),
            "authenticated access to {} must redirect to home",
            route
        );
    }
}

#[test]
fn test_visitor_routes_allow_anonymous() {
    let visitor_only = [AppRoute::Landing, AppRoute::Register, AppRoute::Login];

    for route in visitor_only {
        assert_eq!(evaluate_guard(route.matched(), false), GuardDecision::Allow);
    }
}

// =========================================================
// Guard: unflagged routes and ancestor-chain inheritance
// =========================================================

#[test]
fn test_unflagged_route_always_allowed() {
    // NotFound carries no flags: allowed regardless of auth state
    assert_eq!(
        evaluate_guard(AppRoute::NotFound.matched(), false),
        GuardDecision::Allow
    );
    assert_eq!(
        evaluate_guard(AppRoute::NotFound.matched(), true),
        GuardDecision::Allow
    );
}

#[test]
fn test_child_route_inherits_ancestor_auth_flag() {
    // Detail and "new" routes carry no flag of their own; the
    // requires_auth flag comes from the ancestor in the matched chain.
    let children = [
        AppRoute::NewCollaborationRequest,
        AppRoute::CollaborationRequest { id: 7 },
        AppRoute::Collaboration { id: 3 },
    ];

    for route in children {
        assert!(!route.meta().requires_auth, "child meta itself is unflagged");
        assert_eq!(
            evaluate_guard(route.matched(), false),
            GuardDecision::RedirectTo(AppRoute::Login),
            "anonymous access to nested {} must redirect to login",
            route
        );
        assert_eq!(evaluate_guard(route.matched(), true), GuardDecision::Allow);
    }
}

#[test]
fn test_conflicting_flags_resolved_by_precedence() {
    // Both flags set is a misconfiguration; the auth check wins for an
    // anonymous user, the visitor check wins for an authenticated one.
    let conflicting = [RouteMeta {
        name: "conflict",
        title: "conflict",
        requires_auth: true,
        requires_visitor: true,
    }];

    assert_eq!(
        evaluate_guard(&conflicting, false),
        GuardDecision::RedirectTo(AppRoute::Login)
    );
    assert_eq!(
        evaluate_guard(&conflicting, true),
        GuardDecision::RedirectTo(AppRoute::Home)
    );
}

// =========================================================
// Entry resolution (initial page load)
// =========================================================

#[test]
fn test_entry_deep_link_to_protected_page_commits_login() {
    // An anonymous deep link to a protected page must commit the login
    // route up front; the protected component is never the entry route.
    assert_eq!(resolve_entry("/home", false), AppRoute::Login);
    assert_eq!(resolve_entry("/collaboration-requests/7", false), AppRoute::Login);
}

#[test]
fn test_entry_visitor_page_while_authenticated_commits_home() {
    assert_eq!(resolve_entry("/login", true), AppRoute::Home);
    assert_eq!(resolve_entry("/", true), AppRoute::Home);
}

#[test]
fn test_entry_allowed_route_committed_unchanged() {
    assert_eq!(resolve_entry("/home", true), AppRoute::Home);
    assert_eq!(resolve_entry("/register", false), AppRoute::Register);
    assert_eq!(resolve_entry("/desconocida", false), AppRoute::NotFound);
}

#[test]
fn test_entry_title_comes_from_committed_route() {
    // The document title follows the guarded outcome, not the request:
    // no protected-page title flash for anonymous visitors.
    let committed = resolve_entry("/home", false);
    assert_eq!(committed.meta().title, "Inicia sesión");
}

// =========================================================
// Path parsing and formatting
// =========================================================

#[test]
fn test_from_path_static_routes() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Landing);
    assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/home"), AppRoute::Home);
    assert_eq!(
        AppRoute::from_path("/collaboration-requests"),
        AppRoute::CollaborationRequests
    );
    assert_eq!(
        AppRoute::from_path("/collaborations"),
        AppRoute::Collaborations
    );
}

#[test]
fn test_from_path_dynamic_id_segment() {
    assert_eq!(
        AppRoute::from_path("/collaboration-requests/42"),
        AppRoute::CollaborationRequest { id: 42 }
    );
    assert_eq!(
        AppRoute::from_path("/collaborations/9"),
        AppRoute::Collaboration { id: 9 }
    );
    // "new" wins over the :id pattern
    assert_eq!(
        AppRoute::from_path("/collaboration-requests/new"),
        AppRoute::NewCollaborationRequest
    );
    // Non-numeric id does not match the detail route
    assert_eq!(
        AppRoute::from_path("/collaboration-requests/abc"),
        AppRoute::NotFound
    );
}

#[test]
fn test_from_path_unknown_is_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/home/extra"), AppRoute::NotFound);
}

#[test]
fn test_to_path_formats_dynamic_segment() {
    assert_eq!(
        AppRoute::CollaborationRequest { id: 42 }.to_path(),
        "/collaboration-requests/42"
    );
    assert_eq!(AppRoute::Collaboration { id: 9 }.to_path(), "/collaborations/9");
    assert_eq!(AppRoute::Landing.to_path(), "/");
}

#[test]
fn test_titles_are_spanish_display_titles() {
    assert_eq!(AppRoute::Register.meta().title, "Regístrate");
    assert_eq!(AppRoute::Home.meta().title, "Inicio");
    assert_eq!(AppRoute::NotFound.meta().title, "Página no encontrada");
}
