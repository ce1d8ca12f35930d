//! Implementation plan (`plan.md`) rendering.
//!
//! Section order is fixed. Entity names drive two places: one file line per
//! entity in the backend module diagram, and one TypeORM stub per entity
//! under "Database Schema".

use super::stack::{BACKEND_STACK, FRONTEND_STACK, STACK_SUMMARY, stack_list};
use super::template::Vars;
use super::{DocumentMeta, entity_file_stem, fill};
use crate::error::Result;
use crate::feature::FeatureRecord;

const HEADER: &str = r#"# Implementation Plan: {name}

**Feature**: {slug}
**Tech Stack**: {stack_summary}
**Created**: {date}
**Status**: {status}

## Overview

{name} - A comprehensive feature implementation following the project's architecture patterns and tech stack requirements.

"#;

const BACKEND_ARCHITECTURE: &str = r#"## Architecture

### Backend Architecture

**Module Structure**:
```
backend/src/{slug}/
├── {slug}.module.ts
├── {slug}.service.ts
├── {slug}.controller.ts
├── dto/
│   ├── create-{slug}.dto.ts
│   └── update-{slug}.dto.ts
└── entities/
{entity_files}```

**Tech Stack**:
{backend_stack}
"#;

const ENTITY_FILE_LINE: &str = "    ├── {file_stem}.entity.ts\n";

const FRONTEND_ARCHITECTURE: &str = r#"### Frontend Architecture

**Component Structure**:
```
frontend/src/
├── pages/
│   └── [FeaturePage].tsx
├── components/
│   └── [feature]/
│       ├── [FeatureList].tsx
│       ├── [FeatureDetail].tsx
│       └── [FeatureForm].tsx
└── lib/
    └── api/
        └── [feature].ts
```

**Tech Stack**:
{frontend_stack}
"#;

const DATABASE_SCHEMA: &str = r#"### Database Schema

**Entities**:

"#;

const ENTITY_STUB: &str = r#"#### {entity}

```typescript
@Entity('{file_stem}s')
export class {entity} {{
  @PrimaryGeneratedColumn('uuid')
  id: string;

  @Column()
  workspaceId: string;

  @ManyToOne(() => Workspace, workspace => workspace.id)
  workspace: Workspace;

  @CreateDateColumn()
  createdAt: Date;

  @UpdateDateColumn()
  updatedAt: Date;
}}
```

"#;

const API_ENDPOINTS: &str = r#"### API Endpoints

**Base Path**: `/api/v1/[feature-slug]`

| Method | Endpoint | Description | Auth |
|--------|----------|-------------|------|
| GET | `/` | List all items | JWT |
| GET | `/:id` | Get item by ID | JWT |
| POST | `/` | Create new item | JWT |
| PUT | `/:id` | Update item | JWT |
| DELETE | `/:id` | Delete item | JWT |
| POST | `/:id/process` | Execute feature action | JWT |

"#;

const IMPLEMENTATION_PHASES: &str = r#"## Implementation Phases

### Phase 1: Database & Backend Foundation (Priority: P1)

**Objective**: Set up database entities and basic backend structure

**Tasks**:
1. Create TypeORM entities for all database models
2. Generate and run database migrations
3. Create NestJS module structure
4. Set up repository pattern for data access

**Testing**: Unit tests for entities and repositories

**Deliverable**: Database schema ready, backend module structure in place

---

### Phase 2: Business Logic & Services (Priority: P1)

**Objective**: Implement core business logic

**Tasks**:
1. Implement service layer with business logic
2. Add data validation and error handling
3. Implement required integrations
4. Add logging and monitoring

**Testing**: Service unit tests with 80%+ coverage

**Deliverable**: Fully functional service layer

---

### Phase 3: API Endpoints & Controllers (Priority: P1)

**Objective**: Expose functionality via REST API

**Tasks**:
1. Create DTOs for request/response validation
2. Implement controllers with all CRUD operations
3. Add authentication guards and RBAC
4. Add request/response interceptors
5. Document API endpoints

**Testing**: Controller unit tests, integration tests for endpoints

**Deliverable**: Complete REST API with authentication

---

### Phase 4: Frontend Components & UI (Priority: P2)

**Objective**: Build user interface

**Tasks**:
1. Create page layouts and routing
2. Build UI components using shadcn/ui
3. Implement forms with validation
4. Add state management with Zustand
5. Integrate with backend API
6. Add loading states and error handling

**Testing**: Component tests with Vitest and React Testing Library

**Deliverable**: Fully functional UI

---

### Phase 5: Integration & Testing (Priority: P2)

**Objective**: End-to-end testing and quality assurance

**Tasks**:
1. Run full test suite (backend + frontend)
2. Verify test coverage meets 80%+ threshold
3. Manual testing of all user flows
4. Fix any bugs discovered
5. Performance testing and optimization

**Testing**: Integration tests, E2E tests, manual QA

**Deliverable**: Feature tested and ready for deployment

---

### Phase 6: Documentation & Deployment (Priority: P3)

**Objective**: Document and prepare for production

**Tasks**:
1. Update README.md with feature description
2. Document API endpoints
3. Add inline code comments
4. Update architecture documentation
5. Verify Docker deployment works
6. Create deployment checklist

**Deliverable**: Complete documentation, deployment-ready feature

---

"#;

const DEPENDENCIES: &str = r#"## Dependencies

### External Dependencies
- PostgreSQL database
- NestJS framework
- React framework
- TypeORM
- JWT authentication system

### Internal Dependencies
- User authentication module
- Workspace management
- Database connection

### Feature Dependencies
None (standalone feature)

"#;

const RISK_ASSESSMENT: &str = r#"## Risk Assessment

### Technical Risks
- **Complexity**: Medium - Standard CRUD operations with business logic
- **Performance**: Monitor database query performance with proper indexing
- **Integration**: Ensure proper error handling for all external calls

### Mitigation Strategies
- Use database indexes for frequently queried fields
- Implement caching where appropriate
- Add comprehensive error handling and logging
- Use transactions for multi-step operations

"#;

const TESTING_STRATEGY: &str = r#"## Testing Strategy

### Unit Tests
- **Backend**: Jest tests for services, controllers (80%+ coverage)
- **Frontend**: Vitest tests for components, utilities (80%+ coverage)
- **Focus**: Business logic, edge cases, error handling

### Integration Tests
- API endpoint tests
- Database integration tests
- Authentication flow tests

### E2E Tests
- Critical user journeys
- Complete workflows from UI to database

"#;

const SUCCESS_CRITERIA: &str = r#"## Success Criteria

### Functional
- All acceptance criteria from spec.md met
- All user stories implemented and working
- All API endpoints functional

### Technical
- Backend build succeeds: `cd backend && npm run build`
- Frontend build succeeds: `cd frontend && npm run build`
- All tests pass: `npm test`
- Test coverage ≥ 80% (statements, functions, lines)
- Test coverage ≥ 75% (branches)

### Quality
- No TypeScript `any` types
- All endpoints have input validation
- Proper error handling throughout
- Code follows ESLint rules
- Code formatted with Prettier

### Performance
- API response time < 200ms for simple queries
- Database queries optimized with indexes
- Frontend renders without lag

"#;

const TIMELINE: &str = r#"## Timeline Estimate

| Phase | Estimated Time |
|-------|---------------|
| Phase 1: Database & Backend Foundation | 1-2 days |
| Phase 2: Business Logic & Services | 2-3 days |
| Phase 3: API Endpoints & Controllers | 1-2 days |
| Phase 4: Frontend Components & UI | 2-3 days |
| Phase 5: Integration & Testing | 1-2 days |
| Phase 6: Documentation & Deployment | 1 day |
| **Total** | **8-13 days** |

**Parallel Opportunities**:
- Frontend work can start after Phase 3 completes
- Documentation can be written alongside implementation

"#;

const COMPLIANCE: &str = r#"## Constitution Compliance

This implementation plan adheres to all requirements in `.specify/memory/constitution.md`:

✅ Uses approved tech stack (NestJS, React, PostgreSQL, TypeORM)
✅ Includes comprehensive unit testing (80%+ coverage)
✅ Updates documentation synchronously
✅ Includes quality gates (tests, build, Docker)
✅ No forbidden practices (no `any` types, no hardcoded secrets)
✅ Follows code quality standards
✅ Security standards (JWT auth, input validation)

---

**Next Step**: Generate tasks.md with `specdocs generate`
"#;

/// Render the full implementation plan for one feature.
pub fn render_plan(record: &FeatureRecord, meta: &DocumentMeta) -> Result<String> {
    let sections = [
        header(record, meta)?,
        backend_architecture(record, meta)?,
        frontend_architecture()?,
        database_schema(record)?,
        API_ENDPOINTS.to_string(),
        IMPLEMENTATION_PHASES.to_string(),
        DEPENDENCIES.to_string(),
        RISK_ASSESSMENT.to_string(),
        TESTING_STRATEGY.to_string(),
        SUCCESS_CRITERIA.to_string(),
        TIMELINE.to_string(),
        COMPLIANCE.to_string(),
    ];
    Ok(sections.concat())
}

pub(crate) fn header(record: &FeatureRecord, meta: &DocumentMeta) -> Result<String> {
    let vars = Vars::new()
        .set("name", record.name())
        .set("slug", meta.slug.as_str())
        .set("stack_summary", STACK_SUMMARY)
        .set("date", meta.date.as_str())
        .set("status", record.status());
    fill("plan header", HEADER, &vars)
}

pub(crate) fn backend_architecture(record: &FeatureRecord, meta: &DocumentMeta) -> Result<String> {
    let vars = Vars::new()
        .set("slug", meta.slug.as_str())
        .set("entity_files", entity_file_lines(record.entities())?)
        .set("backend_stack", stack_list(BACKEND_STACK));
    fill("backend architecture", BACKEND_ARCHITECTURE, &vars)
}

pub(crate) fn frontend_architecture() -> Result<String> {
    let vars = Vars::new().set("frontend_stack", stack_list(FRONTEND_STACK));
    fill("frontend architecture", FRONTEND_ARCHITECTURE, &vars)
}

pub(crate) fn database_schema(record: &FeatureRecord) -> Result<String> {
    let mut out = DATABASE_SCHEMA.to_string();
    out.push_str(&entity_stubs(record.entities())?);
    Ok(out)
}

/// One `├── name.entity.ts` diagram line per entity.
pub(crate) fn entity_file_lines(entities: &[String]) -> Result<String> {
    entities
        .iter()
        .map(|entity| {
            let vars = Vars::new().set("file_stem", entity_file_stem(entity));
            fill("entity file line", ENTITY_FILE_LINE, &vars)
        })
        .collect()
}

/// One TypeORM code stub per entity.
pub(crate) fn entity_stubs(entities: &[String]) -> Result<String> {
    entities
        .iter()
        .map(|entity| {
            let vars = Vars::new()
                .set("entity", entity.as_str())
                .set("file_stem", entity_file_stem(entity));
            fill("entity stub", ENTITY_STUB, &vars)
        })
        .collect()
}
