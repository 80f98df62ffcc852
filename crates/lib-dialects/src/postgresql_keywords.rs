//! Keyword tables for PostgreSQL, one phrase per line.

pub(crate) const POSTGRESQL_RESERVED_TOP_LEVEL_KEYWORDS: &str = "ADD
AFTER
ALTER COLUMN
ALTER TABLE
DELETE FROM
EXCEPT
FETCH FIRST
FROM
GROUP BY
HAVING
INSERT INTO
INSERT
LIMIT
ORDER BY
RETURNING
SELECT
SET CURRENT SCHEMA
SET SCHEMA
SET
UPDATE
VALUES
WHERE
";

pub(crate) const POSTGRESQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS: &str = "INTERSECT
INTERSECT ALL
UNION
UNION ALL
";

pub(crate) const POSTGRESQL_RESERVED_NEWLINE_KEYWORDS: &str = "AND
CROSS JOIN
ELSE
FULL JOIN
FULL OUTER JOIN
INNER JOIN
JOIN
LATERAL
LEFT JOIN
LEFT OUTER JOIN
NATURAL JOIN
ON CONFLICT
OR
RIGHT JOIN
RIGHT OUTER JOIN
WHEN
";

pub(crate) const POSTGRESQL_RESERVED_KEYWORDS: &str = "ALL
ANALYZE
ANY
ARRAY
AS
ASC
AUTHORIZATION
BETWEEN
BOTH
BY
CASCADE
CAST
CHECK
COLLATE
COLUMN
CONCURRENTLY
CONFLICT
CONSTRAINT
CREATE
CURRENT_CATALOG
CURRENT_DATE
CURRENT_ROLE
CURRENT_SCHEMA
CURRENT_TIME
CURRENT_TIMESTAMP
CURRENT_USER
DEFAULT
DEFERRABLE
DESC
DISTINCT
DO
DROP
ESCAPE
EXISTS
EXPLAIN
FALSE
FILTER
FOR
FOREIGN KEY
FREEZE
FULL
GRANT
GROUP
ILIKE
IN
INDEX
INITIALLY
INTERVAL
INTO
IS
ISNULL
LEADING
LEFT
LIKE
MATERIALIZED
NOT
NOTHING
NOTNULL
NULL
NULLS FIRST
NULLS LAST
OFFSET
ON
ONLY
ORDER
OUTER
OVER
OVERLAPS
PARTITION BY
PLACING
PRIMARY KEY
REFERENCES
RESTRICT
RIGHT
ROLLBACK
ROW
ROWS
SCHEMA
SESSION_USER
SIMILAR TO
SOME
SYMMETRIC
TABLE
TABLESAMPLE
TEMPORARY
THEN
TO
TRAILING
TRANSACTION
TRIGGER
TRUE
UNIQUE
USING
VARIADIC
VERBOSE
VIEW
WINDOW
WITH
WITHIN GROUP
";
